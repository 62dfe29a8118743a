//! Composition root.

use std::sync::Arc;

use baseera_core::Catalog;
use baseera_core::config::RootConfig;
use baseera_core::user::{FixtureIdentityProvider, IdentityProvider};

use crate::analysis_usecase::AnalysisUseCase;
use crate::app_service::AppStateService;
use crate::processing::{ProcessingBackend, SimulatedProcessingBackend};

/// Everything a presentation layer needs, wired from one configuration.
pub struct AppBootstrap {
    pub config: RootConfig,
    pub app_state: AppStateService,
    pub analysis: AnalysisUseCase,
    pub catalog: Arc<Catalog>,
}

/// Builds the services for one running instance.
pub fn bootstrap(config: RootConfig) -> AppBootstrap {
    let identity_provider: Arc<dyn IdentityProvider> =
        Arc::new(FixtureIdentityProvider::new().with_latency(config.latency.login()));
    let app_state = AppStateService::new(identity_provider);

    let catalog = Arc::new(Catalog::with_defaults());
    let backend: Arc<dyn ProcessingBackend> =
        Arc::new(SimulatedProcessingBackend::new(config.latency.clone()));
    let analysis = AnalysisUseCase::new(
        backend,
        catalog.clone(),
        config.routing.unknown_analysis,
    );

    tracing::info!(
        "[Bootstrap] Ready ({} analyses, {} cases, unknown analysis policy {:?})",
        catalog.analyses().len(),
        catalog.cases().len(),
        config.routing.unknown_analysis
    );

    AppBootstrap {
        config,
        app_state,
        analysis,
        catalog,
    }
}
