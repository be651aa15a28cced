//! Main frames panel rendering
//!
//! Contains the top-level render function for the panel window.

use eframe::egui::{self, ScrollArea};

use crate::gui::theme::BG_PRIMARY;
use crate::panel::{PanelEvent, PanelView};

use super::sections::{render_option_section, render_title_section};

/// Render the frames panel and collect the interactions of this frame
pub fn render_frames_panel(ctx: &egui::Context, view: &PanelView) -> Vec<PanelEvent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    render_title_section(ui, &view.title, &mut events);
                    ui.add_space(24.0);

                    render_option_section(
                        ui,
                        &view.widths,
                        |width, checked| PanelEvent::WidthToggled { width, checked },
                        PanelEvent::WidthsCleared,
                        &mut events,
                    );

                    if let Some(themes) = &view.themes {
                        ui.add_space(24.0);
                        render_option_section(
                            ui,
                            themes,
                            |theme, checked| PanelEvent::ThemeToggled { theme, checked },
                            PanelEvent::ThemesCleared,
                            &mut events,
                        );
                    }
                });
        });

    events
}
