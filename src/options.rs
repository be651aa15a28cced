//! Available frame options supplied by the host

use serde::{Deserialize, Serialize};

/// Theme name standing in for "no themes configured"
pub const NO_THEME: &str = "__PLAYROOM__NO_THEME__";

/// Frame widths offered when the configuration does not list any
pub const DEFAULT_WIDTHS: [u32; 4] = [320, 375, 768, 1024];

/// The full option lists for one panel session. Never mutated by the filter logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableOptions {
    pub widths: Vec<u32>,
    pub themes: Vec<String>,
}

impl Default for AvailableOptions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTHS.to_vec(), Vec::new())
    }
}

impl AvailableOptions {
    /// An empty theme list is stored as the single `NO_THEME` sentinel.
    pub fn new(widths: Vec<u32>, themes: Vec<String>) -> Self {
        let themes = if themes.is_empty() {
            vec![NO_THEME.to_string()]
        } else {
            themes
        };
        Self { widths, themes }
    }

    /// True when at least one theme other than the sentinel exists
    pub fn has_themes(&self) -> bool {
        self.themes.iter().any(|theme| theme != NO_THEME)
    }
}
