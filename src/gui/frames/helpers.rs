//! UI helper functions for frames panel rendering

use eframe::egui::{self, RichText};

use crate::gui::theme::{BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::panel::{OptionRow, RESET_LABEL};

/// Render a section heading with an optional "Clear" button.
/// Returns true when the button was clicked.
pub fn render_heading(ui: &mut egui::Ui, heading: &str, show_reset: bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(heading).monospace().color(TEXT_PRIMARY));
        if show_reset {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                clicked = ui
                    .small_button(RichText::new(RESET_LABEL).color(TEXT_DIM))
                    .clicked();
            });
        }
    });
    clicked
}

/// Render one option checkbox. Returns the new checked state when it changed.
pub fn render_option_row<T>(ui: &mut egui::Ui, row: &OptionRow<T>) -> Option<bool> {
    let mut checked = row.checked;
    let changed = ui
        .horizontal(|ui| {
            let response = ui.checkbox(&mut checked, "");
            ui.add(
                egui::Label::new(RichText::new(&row.label).monospace().color(TEXT_DIM)).truncate(),
            );
            response.changed()
        })
        .inner;
    changed.then_some(checked)
}

/// Render a single-line text field. Returns the new text when it was edited.
pub fn render_text_field(ui: &mut egui::Ui, value: &str, hint: &str) -> Option<String> {
    let mut buffer = value.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .font(egui::TextStyle::Monospace)
            .text_color(TEXT_PRIMARY)
            .hint_text(RichText::new(hint).color(TEXT_MUTED))
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(buffer)
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}
