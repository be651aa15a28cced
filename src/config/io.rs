//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{Config, ConfigError};

/// Commented default configuration written by `init`
pub const DEFAULT_CONFIG: &str = r#"# Playroom frames panel configuration
# ====================================
#
# Available options:
#   title            - Fallback window title when the session title is empty (optional)
#   widths           - Frame widths offered in the panel, in display order
#   themes           - Themes offered in the panel; leave empty to hide the section
#   dedupe_on_insert - Ignore checking a width/theme that is already selected (default: false)

[panel]
# title = "Design System"
widths = [320, 375, 768, 1024]
themes = []
dedupe_on_insert = false
"#;

impl Config {
    /// Get the global config directory path (~/.playroom/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".playroom")
    }

    /// Get the global config file path (~/.playroom/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The parent directory is created if needed. Writes go to a temp file
    /// that is renamed over `path` while an exclusive lock is held.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        write_locked(path, content.as_bytes())
    }

    /// Write the commented default configuration to `path`
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        write_locked(path, DEFAULT_CONFIG.as_bytes())
    }
}

/// Atomically replace `path` with `content` under an exclusive lock file
fn write_locked(path: &Path, content: &[u8]) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    // Lock file is separate from the config so the rename does not drop it
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(write_err)?;
    lock_file.lock_exclusive().map_err(write_err)?;

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(write_err)?;
    temp_file.write_all(content).map_err(write_err)?;
    temp_file.sync_all().map_err(write_err)?;

    std::fs::rename(&temp_path, path).map_err(write_err)?;

    // Lock is released when lock_file is dropped
    Ok(())
}
