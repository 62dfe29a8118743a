//! Analysis domain module.
//!
//! - `model`: Analysis records and their closed enumerations
//! - `wizard`: The new-analysis wizard state machine
//! - `report`: Results view model and result actions
//! - `fixtures`: Sample analyses, sensitive terms and recommendations

mod fixtures;
mod model;
mod report;
mod wizard;

pub use fixtures::{
    DEFAULT_ANALYSIS_ID, default_analyses, default_recommendations, default_sensitive_terms,
};
pub use model::{
    Analysis, AnalysisCategory, AnalysisStatus, Recommendation, RiskLevel, SensitiveTerm,
};
pub use report::{
    AnalysisReport, ResultAction, RiskDimension, RiskScore, Toast, ToastLevel, Verdict,
};
pub use wizard::{
    AnalysisSettings, AnalysisWizard, Audience, ProcessingProgress, ProcessingStage, SAMPLE_DOCUMENT,
    Sensitivity, WizardStep,
};
