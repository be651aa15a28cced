//! Pure state transition function

use super::{Action, PanelState};

/// Apply `action` to `state`, returning the next snapshot
pub fn reduce(state: &PanelState, action: Action) -> PanelState {
    match action {
        Action::UpdateTitle { title } => PanelState {
            title: Some(title),
            ..state.clone()
        },
        Action::ResetVisibleWidths => PanelState {
            visible_widths: None,
            ..state.clone()
        },
        Action::UpdateVisibleWidths { widths } => PanelState {
            visible_widths: Some(widths),
            ..state.clone()
        },
        Action::ResetVisibleThemes => PanelState {
            visible_themes: None,
            ..state.clone()
        },
        Action::UpdateVisibleThemes { themes } => PanelState {
            visible_themes: Some(themes),
            ..state.clone()
        },
    }
}
