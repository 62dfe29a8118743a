//! Processing backend boundary.
//!
//! The wizard's processing step calls a backend once per stage and once more
//! to produce the resulting analysis id. The simulated backend only waits;
//! a real one would upload and analyse the document behind the same trait.

use async_trait::async_trait;
use baseera_core::Result;
use baseera_core::analysis::{AnalysisSettings, DEFAULT_ANALYSIS_ID, ProcessingStage};
use baseera_core::config::LatencyConfig;

/// Runs the processing stages of a new analysis.
#[async_trait]
pub trait ProcessingBackend: Send + Sync {
    /// Runs one stage to completion.
    async fn run_stage(
        &self,
        stage: ProcessingStage,
        document: &str,
        settings: &AnalysisSettings,
    ) -> Result<()>;

    /// Called after every stage completed. Returns the id of the analysis
    /// to show.
    async fn finalize(&self, document: &str, settings: &AnalysisSettings) -> Result<String>;
}

/// Backend that sleeps for the configured stage durations and always hands
/// off to the default analysis record.
#[derive(Debug, Clone, Default)]
pub struct SimulatedProcessingBackend {
    latency: LatencyConfig,
}

impl SimulatedProcessingBackend {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }
}

async fn pause(duration: std::time::Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[async_trait]
impl ProcessingBackend for SimulatedProcessingBackend {
    async fn run_stage(
        &self,
        stage: ProcessingStage,
        _document: &str,
        _settings: &AnalysisSettings,
    ) -> Result<()> {
        pause(self.latency.stage(stage)).await;
        Ok(())
    }

    async fn finalize(&self, _document: &str, _settings: &AnalysisSettings) -> Result<String> {
        pause(self.latency.handoff()).await;
        Ok(DEFAULT_ANALYSIS_ID.to_string())
    }
}
