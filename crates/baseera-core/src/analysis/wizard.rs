//! New-analysis wizard state machine.
//!
//! The wizard moves strictly forward:
//!
//! ```text
//! Uploading -> Configuring -> Processing -> Done
//! ```
//!
//! Each step only accepts the operations that belong to it. Processing is
//! driven from outside (see the application crate's processing backend) by
//! calling [`AnalysisWizard::begin_stage`] and
//! [`AnalysisWizard::complete_stage`] for each stage in order, so the machine
//! itself never waits on a timer.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::model::AnalysisCategory;
use crate::error::{BaseeraError, Result};

/// Document picked when the user selects a file without naming one.
pub const SAMPLE_DOCUMENT: &str = "قرار_تعديل_سياسة_العمل_عن_بعد.pdf";

/// Position of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WizardStep {
    Uploading,
    Configuring,
    Processing,
    Done,
}

impl WizardStep {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uploading => "رفع المستند",
            Self::Configuring => "إعدادات التحليل",
            Self::Processing => "المعالجة",
            Self::Done => "اكتمل",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Sensitivity {
    #[default]
    Standard,
    High,
    Critical,
}

impl Sensitivity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "عادي",
            Self::High => "عالي",
            Self::Critical => "حرج",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Audience {
    #[default]
    Internal,
    Public,
    Stakeholders,
}

impl Audience {
    pub fn label(self) -> &'static str {
        match self {
            Self::Internal => "داخلي",
            Self::Public => "عام",
            Self::Stakeholders => "أصحاب المصلحة",
        }
    }
}

/// Options chosen on the configuration step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub category: AnalysisCategory,
    pub sensitivity: Sensitivity,
    pub audience: Audience,
    /// Compare against similar historical cases
    pub include_historical: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            category: AnalysisCategory::Policy,
            sensitivity: Sensitivity::Standard,
            audience: Audience::Internal,
            include_historical: true,
        }
    }
}

/// One stage of the processing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProcessingStage {
    TextAnalysis,
    SensitiveTermScan,
    HistoricalComparison,
    ReportGeneration,
}

impl ProcessingStage {
    /// Stages in the order they run.
    pub const ALL: [ProcessingStage; 4] = [
        Self::TextAnalysis,
        Self::SensitiveTermScan,
        Self::HistoricalComparison,
        Self::ReportGeneration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::TextAnalysis => "جاري تحليل النص...",
            Self::SensitiveTermScan => "فحص المصطلحات الحساسة...",
            Self::HistoricalComparison => "مقارنة مع الحالات السابقة...",
            Self::ReportGeneration => "إنشاء التقرير...",
        }
    }
}

/// Progress through the processing stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingProgress {
    pub current: Option<ProcessingStage>,
    pub completed: Vec<ProcessingStage>,
}

impl ProcessingProgress {
    /// The stage that should run next, if any remain.
    pub fn next_stage(&self) -> Option<ProcessingStage> {
        ProcessingStage::ALL.get(self.completed.len()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.completed.len() == ProcessingStage::ALL.len()
    }

    /// Completed fraction in percent.
    pub fn percent(&self) -> u8 {
        (self.completed.len() * 100 / ProcessingStage::ALL.len()) as u8
    }
}

/// The new-analysis wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisWizard {
    step: WizardStep,
    document: Option<String>,
    settings: AnalysisSettings,
    progress: ProcessingProgress,
    result_id: Option<String>,
}

impl Default for AnalysisWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Uploading,
            document: None,
            settings: AnalysisSettings::default(),
            progress: ProcessingProgress::default(),
            result_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn progress(&self) -> &ProcessingProgress {
        &self.progress
    }

    /// Id of the analysis produced, once the wizard is done.
    pub fn result_id(&self) -> Option<&str> {
        self.result_id.as_deref()
    }

    fn expect_step(&self, expected: WizardStep, action: &str) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(BaseeraError::invalid_transition(
                self.step.to_string(),
                format!("{action} is only allowed while {expected}"),
            ))
        }
    }

    // ============================================================================
    // Uploading
    // ============================================================================

    pub fn attach_document(&mut self, name: impl Into<String>) -> Result<()> {
        self.expect_step(WizardStep::Uploading, "attaching a document")?;
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(BaseeraError::invalid_transition(
                self.step.to_string(),
                "document name is empty",
            ));
        }
        self.document = Some(name.to_string());
        Ok(())
    }

    pub fn remove_document(&mut self) -> Result<()> {
        self.expect_step(WizardStep::Uploading, "removing the document")?;
        self.document = None;
        Ok(())
    }

    /// Moves to the next step.
    ///
    /// Leaving `Uploading` requires an attached document. Leaving
    /// `Configuring` is the same as [`AnalysisWizard::start_processing`].
    /// `Processing` only advances through its stages, and `Done` is terminal.
    pub fn advance(&mut self) -> Result<WizardStep> {
        match self.step {
            WizardStep::Uploading => {
                if self.document.is_none() {
                    return Err(BaseeraError::invalid_transition(
                        self.step.to_string(),
                        "no document attached",
                    ));
                }
                self.step = WizardStep::Configuring;
            }
            WizardStep::Configuring => self.start_processing()?,
            WizardStep::Processing => {
                return Err(BaseeraError::invalid_transition(
                    self.step.to_string(),
                    "processing advances through its stages",
                ));
            }
            WizardStep::Done => {
                return Err(BaseeraError::invalid_transition(
                    self.step.to_string(),
                    "the wizard is finished",
                ));
            }
        }
        Ok(self.step)
    }

    // ============================================================================
    // Configuring
    // ============================================================================

    pub fn set_category(&mut self, category: AnalysisCategory) -> Result<()> {
        self.expect_step(WizardStep::Configuring, "changing the category")?;
        self.settings.category = category;
        Ok(())
    }

    pub fn set_sensitivity(&mut self, sensitivity: Sensitivity) -> Result<()> {
        self.expect_step(WizardStep::Configuring, "changing the sensitivity")?;
        self.settings.sensitivity = sensitivity;
        Ok(())
    }

    pub fn set_audience(&mut self, audience: Audience) -> Result<()> {
        self.expect_step(WizardStep::Configuring, "changing the audience")?;
        self.settings.audience = audience;
        Ok(())
    }

    /// Flips the historical comparison toggle and returns its new value.
    pub fn toggle_historical(&mut self) -> Result<bool> {
        self.expect_step(WizardStep::Configuring, "toggling historical comparison")?;
        self.settings.include_historical = !self.settings.include_historical;
        Ok(self.settings.include_historical)
    }

    pub fn start_processing(&mut self) -> Result<()> {
        self.expect_step(WizardStep::Configuring, "starting processing")?;
        self.step = WizardStep::Processing;
        self.progress = ProcessingProgress::default();
        Ok(())
    }

    // ============================================================================
    // Processing
    // ============================================================================

    /// Marks `stage` as running. Stages must begin in their fixed order.
    pub fn begin_stage(&mut self, stage: ProcessingStage) -> Result<()> {
        self.expect_step(WizardStep::Processing, "beginning a stage")?;
        if self.progress.current.is_some() {
            return Err(BaseeraError::invalid_transition(
                self.step.to_string(),
                "another stage is still running",
            ));
        }
        if self.progress.next_stage() != Some(stage) {
            return Err(BaseeraError::invalid_transition(
                self.step.to_string(),
                format!("{stage} is out of order"),
            ));
        }
        self.progress.current = Some(stage);
        Ok(())
    }

    /// Marks the running `stage` as completed.
    pub fn complete_stage(&mut self, stage: ProcessingStage) -> Result<()> {
        self.expect_step(WizardStep::Processing, "completing a stage")?;
        if self.progress.current != Some(stage) {
            return Err(BaseeraError::invalid_transition(
                self.step.to_string(),
                format!("{stage} is not running"),
            ));
        }
        self.progress.current = None;
        self.progress.completed.push(stage);
        Ok(())
    }

    /// Finishes the wizard on the produced analysis id.
    pub fn finish(&mut self, analysis_id: impl Into<String>) -> Result<()> {
        self.expect_step(WizardStep::Processing, "finishing")?;
        if !self.progress.is_complete() {
            return Err(BaseeraError::invalid_transition(
                self.step.to_string(),
                "not every stage has completed",
            ));
        }
        self.result_id = Some(analysis_id.into());
        self.step = WizardStep::Done;
        Ok(())
    }
}
