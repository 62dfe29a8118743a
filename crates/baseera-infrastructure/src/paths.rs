//! Platform paths for baseera configuration and logs.
//!
//! ```text
//! ~/.config/baseera/
//! ├── config.toml
//! └── logs/
//!     └── baseera.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

use baseera_core::error::{BaseeraError, Result};

const APP_DIR: &str = "baseera";
const CONFIG_FILE: &str = "config.toml";
const LOG_DIR: &str = "logs";
/// Prefix of the daily-rolling log file.
pub const LOG_FILE_PREFIX: &str = "baseera.log";

pub struct BaseeraPaths;

impl BaseeraPaths {
    /// Returns the baseera configuration directory (e.g. `~/.config/baseera/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| BaseeraError::config("Cannot find config directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(LOG_DIR))
    }
}
