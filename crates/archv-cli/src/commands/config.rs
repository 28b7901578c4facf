use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use archv_core::AppConfig;

/// Print the configuration file location
pub fn path(path: &Path) -> Result<()> {
    let exists = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), exists);
    Ok(())
}

/// Print the effective configuration, defaults filled in
pub fn show(config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    print!("{}", content);
    Ok(())
}

/// Write a default configuration file
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }
    AppConfig::default().save_to(path)?;
    info!("Wrote default configuration to {}", path.display());
    println!("Wrote {}", path.display());
    Ok(())
}
