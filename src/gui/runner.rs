//! GUI runner - launches the frames panel window

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::PlayroomApp;
use crate::config::Config;
use crate::store::PanelState;
use crate::title::TITLE_SUFFIX;

/// Run the frames panel window until it is closed
pub fn run_gui(config: Config, initial_state: PanelState) -> Result<()> {
    let available = config.panel.available_options();
    info!(
        "Opening frames panel ({} widths, {} themes)",
        available.widths.len(),
        if available.has_themes() {
            available.themes.len()
        } else {
            0
        }
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE_SUFFIX)
            .with_inner_size([360.0, 640.0])
            .with_min_inner_size([280.0, 320.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = PlayroomApp::new(config, initial_state);

    eframe::run_native("playroom-panel", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
