//! Loading rule overrides from config files
//!
//! A config file holds any subset of the `RuleSetSource` fields, as JSON or TOML.
//! A broken config never stops a run: [`load_rules`] logs the problem and
//! hands back the base rule set.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vaultscrub_core::{ConfigError, RuleSet, RuleSetSource};

/// File names looked up in the working directory and its parents
pub const PROJECT_CONFIG_NAMES: &[&str] = &[".vaultscrub.json", ".vaultscrub.toml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Toml => "TOML",
        }
    }
}

/// Parse override fields from config file content
pub fn parse_source(content: &str, format: ConfigFormat) -> Result<RuleSetSource, ConfigError> {
    let parsed: Result<RuleSetSource, String> = match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| ConfigError::Parse {
        format: format.name(),
        message,
    })
}

/// Read `path` and merge its overrides onto `base`
pub fn try_load_rules(base: &RuleSet, path: &Path) -> Result<RuleSet, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let source = parse_source(&content, ConfigFormat::from_path(path))?;
    RuleSet::build(base, &source)
}

/// Like [`try_load_rules`], but falls back to `base` on any error.
///
/// With no path, `base` is returned as is.
pub fn load_rules(base: &RuleSet, path: Option<&Path>) -> RuleSet {
    let Some(path) = path else {
        debug!("No config file, using default rules");
        return base.clone();
    };

    match try_load_rules(base, path) {
        Ok(rules) => {
            debug!("Loaded rules from {}", path.display());
            rules
        }
        Err(e) => {
            warn!("Ignoring config {}: {}", path.display(), e);
            base.clone()
        }
    }
}

/// Pick the config file for this run.
///
/// An explicit path always wins, even if it does not exist (the load then
/// fails and falls back). Otherwise the working directory and its parents
/// are searched, then the user config directory.
pub fn find_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_from(&cwd))
        .or_else(|| user_config_path().filter(|path| path.exists()))
}

/// Find a project config by walking up from `start`
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in PROJECT_CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Per-user config file (`config.toml` in the platform config directory)
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "vaultscrub", "vaultscrub")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Render a config file containing every field of `rules`
pub fn render_config(rules: &RuleSet, format: ConfigFormat) -> Result<String, ConfigError> {
    let source = RuleSetSource::from(rules);
    let rendered = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(&source).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::to_string_pretty(&source).map_err(|e| e.to_string()),
    };

    rendered.map_err(|message| ConfigError::Parse {
        format: format.name(),
        message,
    })
}
