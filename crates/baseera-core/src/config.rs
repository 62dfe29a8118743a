//! Root configuration model.
//!
//! The configuration file is optional. Every section and field falls back to
//! its default, so an empty or partial `config.toml` is valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::analysis::ProcessingStage;

/// Top-level configuration as it appears in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub latency: LatencyConfig,
    pub routing: RoutingConfig,
    pub logging: LoggingConfig,
}

/// Simulated latencies, in milliseconds.
///
/// These stand in for a credential exchange and a processing backend. Setting
/// them to zero (see [`LatencyConfig::instant`]) keeps every flow intact while
/// removing the waits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub login_ms: u64,
    pub text_analysis_ms: u64,
    pub sensitive_term_scan_ms: u64,
    pub historical_comparison_ms: u64,
    pub report_generation_ms: u64,
    /// Pause between the last processing stage and the hand-off to results.
    pub handoff_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: 1500,
            text_analysis_ms: 2000,
            sensitive_term_scan_ms: 1500,
            historical_comparison_ms: 2000,
            report_generation_ms: 1500,
            handoff_ms: 500,
        }
    }
}

impl LatencyConfig {
    /// A profile with every delay set to zero.
    pub fn instant() -> Self {
        Self {
            login_ms: 0,
            text_analysis_ms: 0,
            sensitive_term_scan_ms: 0,
            historical_comparison_ms: 0,
            report_generation_ms: 0,
            handoff_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    /// Returns the simulated duration of one processing stage.
    pub fn stage(&self, stage: ProcessingStage) -> Duration {
        let ms = match stage {
            ProcessingStage::TextAnalysis => self.text_analysis_ms,
            ProcessingStage::SensitiveTermScan => self.sensitive_term_scan_ms,
            ProcessingStage::HistoricalComparison => self.historical_comparison_ms,
            ProcessingStage::ReportGeneration => self.report_generation_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn handoff(&self) -> Duration {
        Duration::from_millis(self.handoff_ms)
    }
}

/// How `/analysis/:id` treats an id with no matching record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownAnalysisPolicy {
    /// Render the default analysis record and flag the result as a fallback.
    #[default]
    Fallback,
    /// Report the id as not found.
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub unknown_analysis: UnknownAnalysisPolicy,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG` when set.
    pub level: String,
    /// Also write a daily-rolling log file under the config directory.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.latency.login(), Duration::from_millis(1500));
        assert_eq!(config.routing.unknown_analysis, UnknownAnalysisPolicy::Fallback);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config: RootConfig = toml::from_str(
            r#"
            [latency]
            login_ms = 10

            [routing]
            unknown_analysis = "not_found"
            "#,
        )
        .unwrap();

        assert_eq!(config.latency.login_ms, 10);
        // Untouched fields keep their defaults
        assert_eq!(config.latency.text_analysis_ms, 2000);
        assert_eq!(config.routing.unknown_analysis, UnknownAnalysisPolicy::NotFound);
        assert!(!config.logging.file);
    }

    #[test]
    fn test_stage_durations() {
        let latency = LatencyConfig::default();
        assert_eq!(
            latency.stage(ProcessingStage::TextAnalysis),
            Duration::from_millis(2000)
        );
        assert_eq!(
            latency.stage(ProcessingStage::SensitiveTermScan),
            Duration::from_millis(1500)
        );
        assert_eq!(latency.handoff(), Duration::from_millis(500));
    }

    #[test]
    fn test_instant_profile() {
        let latency = LatencyConfig::instant();
        assert_eq!(latency.login(), Duration::ZERO);
        for stage in ProcessingStage::ALL {
            assert_eq!(latency.stage(stage), Duration::ZERO);
        }
    }
}
