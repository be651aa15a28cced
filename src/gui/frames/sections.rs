//! Title, widths and themes sections

use eframe::egui;

use super::helpers::{render_heading, render_option_row, render_section_frame, render_text_field};
use crate::gui::theme::TEXT_PRIMARY;
use crate::panel::{OptionSection, PanelEvent, TitleField};

/// Render the title field section
pub fn render_title_section(ui: &mut egui::Ui, field: &TitleField, events: &mut Vec<PanelEvent>) {
    ui.label(
        egui::RichText::new(field.heading)
            .monospace()
            .color(TEXT_PRIMARY),
    );
    ui.add_space(8.0);
    if let Some(title) = render_text_field(ui, &field.value, field.placeholder) {
        events.push(PanelEvent::TitleEdited { title });
    }
}

/// Render a checkbox section.
///
/// `on_toggle` builds the event for a changed row, `on_clear` the event for
/// the "Clear" button.
pub fn render_option_section<T: Clone>(
    ui: &mut egui::Ui,
    section: &OptionSection<T>,
    on_toggle: impl Fn(T, bool) -> PanelEvent,
    on_clear: PanelEvent,
    events: &mut Vec<PanelEvent>,
) {
    if render_heading(ui, section.heading, section.show_reset) {
        events.push(on_clear);
    }
    ui.add_space(4.0);

    render_section_frame(ui, |ui| {
        for row in &section.options {
            if let Some(checked) = render_option_row(ui, row) {
                events.push(on_toggle(row.value.clone(), checked));
            }
        }
    });
}
