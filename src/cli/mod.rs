//! CLI command implementations

pub mod gui;
pub mod init;
pub mod show;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use playroom_panel::store::PanelState;

/// Resolve `--config`, defaulting to the global config path
pub fn config_path(config: Option<PathBuf>) -> PathBuf {
    config.unwrap_or_else(playroom_panel::config::Config::global_config_path)
}

/// Read a JSON state snapshot, or start from an empty state
pub fn load_state(path: Option<&Path>) -> Result<PanelState> {
    let Some(path) = path else {
        return Ok(PanelState::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file: {}", path.display()))?;
    Ok(state)
}
