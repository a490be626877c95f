pub mod init;
pub mod redact;
pub mod rules;

use std::path::Path;

use vaultscrub_config::{find_config, load_rules};
use vaultscrub_core::RuleSet;

/// Defaults, then the config file, then the `--preserve-keys` flag
pub fn effective_rules(config: Option<&Path>, preserve_keys: bool) -> RuleSet {
    let path = find_config(config);
    load_rules(&RuleSet::defaults(), path.as_deref()).with_preserve_keys(preserve_keys)
}
