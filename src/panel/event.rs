//! User interactions raised by a panel renderer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PanelEvent {
    /// The title field now holds `title` (one event per keystroke)
    TitleEdited { title: String },
    /// A width checkbox changed to `checked`
    WidthToggled { width: u32, checked: bool },
    WidthsCleared,
    /// A theme checkbox changed to `checked`
    ThemeToggled { theme: String, checked: bool },
    ThemesCleared,
}
