use std::path::PathBuf;

use anyhow::Result;

use super::effective_rules;

pub fn handle(config: Option<PathBuf>, preserve_keys: bool) -> Result<()> {
    let rules = effective_rules(config.as_deref(), preserve_keys);
    println!("{}", serde_json::to_string_pretty(&rules)?);
    Ok(())
}
