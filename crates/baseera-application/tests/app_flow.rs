use baseera_application::{ProcessingEvent, bootstrap};
use baseera_core::AppEvent;
use baseera_core::analysis::{AnalysisWizard, SAMPLE_DOCUMENT, WizardStep};
use baseera_core::config::{LatencyConfig, RootConfig, UnknownAnalysisPolicy};
use baseera_core::route::{Layout, View};
use tokio::sync::mpsc;

fn instant_config() -> RootConfig {
    RootConfig {
        latency: LatencyConfig::instant(),
        ..RootConfig::default()
    }
}

#[tokio::test]
async fn test_session_scenario() {
    let app = bootstrap(instant_config());

    // Fresh session is anonymous and gated
    assert!(!app.app_state.is_authenticated().await);
    assert_eq!(app.app_state.navigate("/dashboard").await.view, View::Login);

    let user = app.app_state.login().await.expect("login always succeeds");
    assert!(!user.name.is_empty());

    let nav = app.app_state.navigate("/").await;
    assert_eq!(nav.view, View::Dashboard);
    assert_eq!(nav.layout, Layout::Shell);

    app.app_state.logout().await;
    assert!(!app.app_state.is_authenticated().await);
    assert!(app.app_state.user().await.is_none());
    assert_eq!(app.app_state.navigate("/cases").await.view, View::Login);
}

#[tokio::test]
async fn test_notification_scenario() {
    let app = bootstrap(instant_config());
    let mut events = app.app_state.subscribe();

    assert_eq!(app.app_state.notifications().await.len(), 6);
    assert_eq!(app.app_state.unread_count().await, 3);

    app.app_state.mark_as_read("notif_001").await;
    assert_eq!(app.app_state.unread_count().await, 2);

    app.app_state.mark_as_read("notif_999").await;
    assert_eq!(app.app_state.unread_count().await, 2);

    assert!(matches!(
        events.recv().await.unwrap(),
        AppEvent::NotificationRead { unread_count: 2, .. }
    ));
}

#[tokio::test]
async fn test_wizard_to_results() {
    let app = bootstrap(instant_config());
    app.app_state.login().await.unwrap();
    assert_eq!(
        app.app_state.navigate("/analysis/new").await.view,
        View::NewAnalysis
    );

    let mut wizard = AnalysisWizard::new();
    wizard.attach_document(SAMPLE_DOCUMENT).unwrap();
    wizard.advance().unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let id = app.analysis.run(&mut wizard, Some(&tx)).await.unwrap();
    drop(tx);
    assert_eq!(wizard.step(), WizardStep::Done);

    let mut last = None;
    while let Some(event) = rx.recv().await {
        last = Some(event);
    }
    assert_eq!(
        last,
        Some(ProcessingEvent::Finished {
            analysis_id: id.clone()
        })
    );

    let nav = app.app_state.navigate(&format!("/analysis/{id}")).await;
    assert_eq!(nav.view, View::AnalysisResults { id: id.clone() });

    let report = app.analysis.report(&id).unwrap();
    assert_eq!(report.analysis.id, id);
    assert!(!report.fallback);
}

#[tokio::test]
async fn test_strict_unknown_analysis_policy() {
    let mut config = instant_config();
    config.routing.unknown_analysis = UnknownAnalysisPolicy::NotFound;
    let app = bootstrap(config);

    assert!(app.analysis.report("ana_999").unwrap_err().is_not_found());
}
