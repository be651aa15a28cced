//! Actions accepted by the panel store

use serde::{Deserialize, Serialize};

/// The closed set of state transitions.
///
/// Serialized adjacently tagged, e.g.
/// `{"type":"updateVisibleWidths","payload":{"widths":[320]}}` or
/// `{"type":"resetVisibleThemes"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    UpdateTitle { title: String },
    ResetVisibleWidths,
    UpdateVisibleWidths { widths: Vec<u32> },
    ResetVisibleThemes,
    UpdateVisibleThemes { themes: Vec<String> },
}

impl Action {
    /// Wire name of the action, used for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Action::UpdateTitle { .. } => "updateTitle",
            Action::ResetVisibleWidths => "resetVisibleWidths",
            Action::UpdateVisibleWidths { .. } => "updateVisibleWidths",
            Action::ResetVisibleThemes => "resetVisibleThemes",
            Action::UpdateVisibleThemes { .. } => "updateVisibleThemes",
        }
    }
}
