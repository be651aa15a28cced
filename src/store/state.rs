//! Panel state snapshot

use serde::{Deserialize, Serialize};

/// Host-owned panel state. Absent lists mean "no filter".
///
/// Visible lists are not deduplicated or validated against the available
/// options; stale and duplicate entries are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_widths: Option<Vec<u32>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_themes: Option<Vec<String>>,

    /// `None` means the title was never set; `Some("")` is an explicit empty title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl PanelState {
    pub fn visible_widths(&self) -> &[u32] {
        self.visible_widths.as_deref().unwrap_or_default()
    }

    pub fn visible_themes(&self) -> &[String] {
        self.visible_themes.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
