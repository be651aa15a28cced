//! Init command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use playroom_panel::config::Config;

/// Write the default configuration to `config_path`
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_default(config_path)
        .with_context(|| format!("Failed to initialize {}", config_path.display()))?;
    info!("Created: {}", config_path.display());

    Ok(())
}
