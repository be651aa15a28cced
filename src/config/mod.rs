//! Configuration loading and management

mod io;
mod settings;

pub use io::DEFAULT_CONFIG;
pub use settings::PanelSettings;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::panel::FramesPanel;

/// Error type for config file handling
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Frames panel settings
    #[serde(default)]
    pub panel: PanelSettings,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path`, falling back to defaults when it is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}. Falling back to defaults.", e);
                Self::default()
            }
        }
    }

    /// Build the panel described by this configuration
    pub fn frames_panel(&self) -> FramesPanel {
        FramesPanel::new(self.panel.available_options())
            .with_insert_policy(self.panel.insert_policy())
    }

    pub fn fallback_title(&self) -> Option<&str> {
        self.panel.fallback_title()
    }
}
