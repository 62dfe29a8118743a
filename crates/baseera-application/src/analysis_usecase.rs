//! New-analysis use case.
//!
//! Drives an [`AnalysisWizard`] through its processing step against a
//! [`ProcessingBackend`], reporting progress over a channel, and builds the
//! results view for a finished (or any other) analysis.

use std::sync::Arc;

use baseera_core::analysis::{AnalysisReport, AnalysisWizard, ProcessingStage, WizardStep};
use baseera_core::config::UnknownAnalysisPolicy;
use baseera_core::{BaseeraError, Catalog, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::processing::ProcessingBackend;

/// Progress of a processing run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProcessingEvent {
    StageStarted {
        stage: ProcessingStage,
    },
    StageCompleted {
        stage: ProcessingStage,
        percent: u8,
    },
    Finished {
        analysis_id: String,
    },
}

pub struct AnalysisUseCase {
    backend: Arc<dyn ProcessingBackend>,
    catalog: Arc<Catalog>,
    unknown_analysis: UnknownAnalysisPolicy,
}

impl AnalysisUseCase {
    pub fn new(
        backend: Arc<dyn ProcessingBackend>,
        catalog: Arc<Catalog>,
        unknown_analysis: UnknownAnalysisPolicy,
    ) -> Self {
        Self {
            backend,
            catalog,
            unknown_analysis,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs every processing stage in order and finishes the wizard.
    ///
    /// The wizard must be configuring (processing is started here) or already
    /// processing with no stage completed yet. Progress events are sent to
    /// `progress` when given; a dropped receiver does not stop the run.
    ///
    /// Returns the id of the analysis to show.
    pub async fn run(
        &self,
        wizard: &mut AnalysisWizard,
        progress: Option<&UnboundedSender<ProcessingEvent>>,
    ) -> Result<String> {
        let run_id = Uuid::new_v4();
        let notify = |event: ProcessingEvent| {
            if let Some(tx) = progress {
                let _ = tx.send(event);
            }
        };

        match wizard.step() {
            WizardStep::Configuring => wizard.start_processing()?,
            WizardStep::Processing if wizard.progress().completed.is_empty() => {}
            step => {
                return Err(BaseeraError::invalid_transition(
                    step.to_string(),
                    "processing can only run from the configuration step",
                ));
            }
        }

        let document = wizard
            .document()
            .map(str::to_string)
            .ok_or_else(|| BaseeraError::internal("processing without a document"))?;
        let settings = wizard.settings().clone();

        tracing::info!(
            "[Analysis] Run {} started for {} ({}, {})",
            run_id,
            document,
            settings.category,
            settings.sensitivity
        );

        for stage in ProcessingStage::ALL {
            wizard.begin_stage(stage)?;
            notify(ProcessingEvent::StageStarted { stage });

            self.backend.run_stage(stage, &document, &settings).await?;

            wizard.complete_stage(stage)?;
            tracing::debug!("[Analysis] Run {} completed {}", run_id, stage);
            notify(ProcessingEvent::StageCompleted {
                stage,
                percent: wizard.progress().percent(),
            });
        }

        let analysis_id = self.backend.finalize(&document, &settings).await?;
        wizard.finish(analysis_id.clone())?;

        tracing::info!("[Analysis] Run {} finished on {}", run_id, analysis_id);
        notify(ProcessingEvent::Finished {
            analysis_id: analysis_id.clone(),
        });

        Ok(analysis_id)
    }

    /// Builds the results view for `id` under the configured policy.
    pub fn report(&self, id: &str) -> Result<AnalysisReport> {
        self.catalog.analysis_report(id, self.unknown_analysis)
    }
}
