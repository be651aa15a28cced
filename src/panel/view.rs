//! Render-ready description of the frames panel

use serde::Serialize;

pub const TITLE_HEADING: &str = "Title";
pub const TITLE_PLACEHOLDER: &str = "Enter a title for this Playroom...";
pub const WIDTHS_HEADING: &str = "Widths";
pub const THEMES_HEADING: &str = "Themes";
pub const RESET_LABEL: &str = "Clear";

/// Everything a renderer needs to draw the panel for one state snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub title: TitleField,
    pub widths: OptionSection<u32>,
    /// `None` when no real themes are configured
    pub themes: Option<OptionSection<String>>,
    /// Pending document title side effect, if any
    pub document_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleField {
    pub heading: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

/// A heading with an optional "Clear" button and one checkbox per option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSection<T> {
    pub heading: &'static str,
    /// Whether the "Clear" button is offered
    pub show_reset: bool,
    pub options: Vec<OptionRow<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRow<T> {
    pub value: T,
    pub label: String,
    pub checked: bool,
}

impl<T> OptionSection<T> {
    pub fn checked_values(&self) -> impl Iterator<Item = &T> {
        self.options
            .iter()
            .filter(|row| row.checked)
            .map(|row| &row.value)
    }
}
