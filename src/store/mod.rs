//! Panel state container
//!
//! State is only changed by dispatching an [`Action`]. Every action replaces
//! one field wholesale through the pure [`reduce`] function.

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::reduce;
pub use state::PanelState;

use tracing::debug;

/// Holds the current state snapshot and applies dispatched actions
#[derive(Debug, Default)]
pub struct Store {
    state: PanelState,
    revision: u64,
}

impl Store {
    pub fn new(state: PanelState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Number of actions applied since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, action: Action) -> &PanelState {
        debug!("Dispatch {} (revision {})", action.kind(), self.revision + 1);
        self.state = reduce(&self.state, action);
        self.revision += 1;
        &self.state
    }

    pub fn into_state(self) -> PanelState {
        self.state
    }
}
