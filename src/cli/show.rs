//! Show command implementation

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use playroom_panel::config::Config;
use playroom_panel::store::{Action, Store};

/// Apply `dispatch` actions to the state snapshot and print the derived panel as JSON
pub fn show_command(config_path: &Path, state_path: Option<&Path>, dispatch: &[String]) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let panel = config.frames_panel();
    let mut store = Store::new(super::load_state(state_path)?);

    for raw in dispatch {
        let action: Action = serde_json::from_str(raw)
            .with_context(|| format!("Invalid action: {}", raw))?;
        store.dispatch(action);
    }
    debug!("Applied {} actions", store.revision());

    let view = panel.view(store.state(), config.fallback_title());
    let json = serde_json::to_string_pretty(&view).context("Failed to serialize panel view")?;
    println!("{}", json);

    Ok(())
}
