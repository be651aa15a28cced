//! Gui command implementation

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use playroom_panel::config::Config;

/// Open the frames panel window
pub fn gui_command(config_path: &Path, state_path: Option<&Path>) -> Result<()> {
    debug!("Using config {}", config_path.display());
    let config = Config::load_or_default(config_path);
    let state = super::load_state(state_path)?;
    playroom_panel::gui::run_gui(config, state)
}
