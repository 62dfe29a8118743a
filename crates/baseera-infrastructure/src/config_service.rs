//! Configuration service.
//!
//! Loads [`RootConfig`] from `config.toml` once and serves the cached copy
//! afterwards. A missing file is not an error: the defaults apply.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use baseera_core::config::RootConfig;
use baseera_core::error::{BaseeraError, Result};

use crate::paths::BaseeraPaths;

#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file path; `None` resolves the platform default on load.
    path: Option<PathBuf>,
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Reads from the platform config file.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Reads from `path` instead of the platform config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the file this service reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => BaseeraPaths::config_file(),
        }
    }

    /// Gets the root configuration, loading it on first access.
    ///
    /// A file that exists but does not parse is reported, not replaced by
    /// defaults.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| BaseeraError::internal(format!("config lock poisoned: {e}")))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load(&self.config_path()?)?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| BaseeraError::internal(format!("config lock poisoned: {e}")))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Drops the cached copy so the next access re-reads the file.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!("[ConfigService] {} not found, using defaults", path.display());
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| {
            BaseeraError::config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        tracing::info!("[ConfigService] Loaded {}", path.display());
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseera_core::config::UnknownAnalysisPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));

        assert_eq!(service.get_config().unwrap(), RootConfig::default());
    }

    #[test]
    fn test_reads_and_caches() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[routing]\nunknown_analysis = \"not_found\"\n").unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config().unwrap();
        assert_eq!(config.routing.unknown_analysis, UnknownAnalysisPolicy::NotFound);

        // Cached copy survives the file changing underneath
        fs::write(&path, "[latency]\nlogin_ms = 1\n").unwrap();
        assert_eq!(service.get_config().unwrap(), config);

        service.invalidate_cache();
        let reloaded = service.get_config().unwrap();
        assert_eq!(reloaded.latency.login_ms, 1);
        assert_eq!(reloaded.routing.unknown_analysis, UnknownAnalysisPolicy::Fallback);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[latency\nlogin_ms = ").unwrap();

        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(err.is_config());
    }
}
