//! Panel settings

use serde::{Deserialize, Serialize};

use crate::filter::InsertPolicy;
use crate::options::{AvailableOptions, DEFAULT_WIDTHS};

/// `[panel]` table of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Fallback document title used when the session title is empty or unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Frame widths offered in the panel, in display order
    #[serde(default = "default_widths")]
    pub widths: Vec<u32>,

    /// Themes offered in the panel. Empty means no theme section.
    #[serde(default)]
    pub themes: Vec<String>,

    /// Skip appending a width/theme that is already in the visible list
    #[serde(default)]
    pub dedupe_on_insert: bool,
}

fn default_widths() -> Vec<u32> {
    DEFAULT_WIDTHS.to_vec()
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            title: None,
            widths: default_widths(),
            themes: Vec::new(),
            dedupe_on_insert: false,
        }
    }
}

impl PanelSettings {
    pub fn available_options(&self) -> AvailableOptions {
        AvailableOptions::new(self.widths.clone(), self.themes.clone())
    }

    pub fn insert_policy(&self) -> InsertPolicy {
        InsertPolicy::from_dedupe_flag(self.dedupe_on_insert)
    }

    /// The configured fallback title, if set and non-empty
    pub fn fallback_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}
