pub mod analysis_usecase;
pub mod app_service;
pub mod bootstrap;
pub mod processing;

pub use analysis_usecase::{AnalysisUseCase, ProcessingEvent};
pub use app_service::AppStateService;
pub use bootstrap::{AppBootstrap, bootstrap};
pub use processing::{ProcessingBackend, SimulatedProcessingBackend};
