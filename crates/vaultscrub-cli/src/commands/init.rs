use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vaultscrub_config::{ConfigFormat, render_config};
use vaultscrub_core::RuleSet;

use crate::cli::InitFormat;

pub fn handle(format: InitFormat, force: bool) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let path = write_starter_config(&current_dir, format, force)?;

    println!("✓ Created {}", path.display());
    println!("  Edit it to replace any of the default rule lists");

    Ok(())
}

/// Write the default rules into `dir` as `.vaultscrub.{json,toml}`
pub fn write_starter_config(dir: &Path, format: InitFormat, force: bool) -> Result<PathBuf> {
    let (name, format) = match format {
        InitFormat::Json => (".vaultscrub.json", ConfigFormat::Json),
        InitFormat::Toml => (".vaultscrub.toml", ConfigFormat::Toml),
    };
    let path = dir.join(name);

    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let content = render_config(&RuleSet::defaults(), format)?;
    std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}
