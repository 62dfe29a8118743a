//! Tracing subscriber setup.

use std::io;

use baseera_core::config::LoggingConfig;
use baseera_core::error::{BaseeraError, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::paths::{BaseeraPaths, LOG_FILE_PREFIX};

/// Keeps the file writer flushing until dropped.
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Builds the filter: `RUST_LOG` wins, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level)
        .map_err(|e| BaseeraError::config(format!("Invalid log level '{default_level}': {e}")))
}

/// Installs the global subscriber: stderr always, plus a daily log file when
/// `config.file` is set.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = env_filter(&config.level)?;
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_target(false);

    let (file_layer, guard) = if config.file {
        let log_dir = BaseeraPaths::log_dir()?;
        std::fs::create_dir_all(&log_dir)?;
        let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| BaseeraError::internal(format!("Failed to install subscriber: {e}")))?;

    Ok(LoggingGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_config_error() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(env_filter("baseera=loud").unwrap_err().is_config());
        assert!(env_filter("debug").is_ok());
    }
}
