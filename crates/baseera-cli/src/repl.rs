//! Interactive shell over the application services.

use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::{broadcast, mpsc};

use baseera_application::AppBootstrap;
use baseera_core::analysis::{AnalysisWizard, SAMPLE_DOCUMENT, WizardStep};
use baseera_core::case::CaseFilter;
use baseera_core::error::{BaseeraError, Result};
use baseera_core::route::{Layout, Navigation, View};

use crate::commands::{Command, Setting};
use crate::helper::CliHelper;
use crate::render;

/// What the loop does after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub struct Repl {
    app: AppBootstrap,
    location: Navigation,
    wizard: AnalysisWizard,
    case_filter: CaseFilter,
}

impl Repl {
    pub async fn new(app: AppBootstrap, start: &str) -> Self {
        let location = app.app_state.navigate(start).await;
        Self {
            app,
            location,
            wizard: AnalysisWizard::new(),
            case_filter: CaseFilter::default(),
        }
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut rl = Editor::<CliHelper, DefaultHistory>::new()?;
        rl.set_helper(Some(CliHelper));

        let mut events = self.app.app_state.subscribe();
        let event_log = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => tracing::debug!("[Repl] {:?}", event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("[Repl] Event log skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        println!("{}", render::banner());
        println!("{}", self.render_location().await);

        loop {
            let prompt = format!("{} > ", self.location.location);
            match rl.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(trimmed);

                    let result = match trimmed.parse::<Command>() {
                        Ok(command) => self.handle(command).await,
                        Err(e) => Err(e),
                    };
                    match result {
                        Ok(Outcome::Print(text)) => println!("{text}"),
                        Ok(Outcome::Quit) => {
                            println!("{}", "مع السلامة".bright_green());
                            break;
                        }
                        Err(e) => eprintln!("{}", e.to_string().red()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("{}", format!("Error: {err:?}").red());
                    break;
                }
            }
        }

        event_log.abort();
        Ok(())
    }

    /// Executes one command against the session.
    pub async fn handle(&mut self, command: Command) -> Result<Outcome> {
        let text = match command {
            Command::Login => {
                if self.app.app_state.is_authenticated().await {
                    return Ok(Outcome::Print("Already signed in.".to_string()));
                }
                println!("{}", "جاري تسجيل الدخول...".bright_black());
                let user = self.app.app_state.login().await?;
                println!("{}", format!("أهلاً {}", user.name).green());
                self.go("/").await
            }
            Command::Logout => {
                self.app.app_state.logout().await;
                self.wizard = AnalysisWizard::new();
                self.go("/").await
            }
            Command::Go(path) => self.go(&path).await,
            Command::WhoAmI => match self.app.app_state.user().await {
                Some(user) => render::user(&user),
                None => "Not signed in.".to_string(),
            },
            Command::Notifications => {
                self.require_session().await?;
                let list = self.app.app_state.notifications().await;
                let unread = self.app.app_state.unread_count().await;
                render::notifications(&list, unread)
            }
            Command::Read(id) => {
                self.require_session().await?;
                if self.app.app_state.mark_as_read(&id).await {
                    format!("{} ({} unread)", id, self.app.app_state.unread_count().await)
                } else if self.app.app_state.notifications().await.iter().any(|n| n.id == id) {
                    format!("{id} was already read")
                } else {
                    return Err(BaseeraError::not_found("Notification", id));
                }
            }
            Command::Sidebar => {
                self.require_session().await?;
                self.app.app_state.toggle_sidebar().await;
                self.render_location().await
            }
            Command::Upload(name) => {
                self.wizard_mut()?
                    .attach_document(name.unwrap_or_else(|| SAMPLE_DOCUMENT.to_string()))?;
                render::wizard(&self.wizard)
            }
            Command::Remove => {
                self.wizard_mut()?.remove_document()?;
                render::wizard(&self.wizard)
            }
            Command::Next => {
                if self.wizard_mut()?.step() == WizardStep::Configuring {
                    return self.start().await;
                }
                self.wizard.advance()?;
                render::wizard(&self.wizard)
            }
            Command::Set(setting) => {
                let wizard = self.wizard_mut()?;
                match setting {
                    Setting::Category(category) => wizard.set_category(category)?,
                    Setting::Sensitivity(sensitivity) => wizard.set_sensitivity(sensitivity)?,
                    Setting::Audience(audience) => wizard.set_audience(audience)?,
                    Setting::Historical => {
                        wizard.toggle_historical()?;
                    }
                }
                render::wizard(&self.wizard)
            }
            Command::Start => return self.start().await,
            Command::Cases { query, outcome } => {
                self.case_filter = CaseFilter::new(query, outcome);
                self.go("/cases").await
            }
            Command::Action(action) => {
                let View::AnalysisResults { id } = &self.location.view else {
                    return Err(BaseeraError::invalid_input("open an analysis result first"));
                };
                self.app.analysis.report(id)?;
                render::toast(&action.toast())
            }
            Command::Help => render::help(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Print(text))
    }

    async fn require_session(&self) -> Result<()> {
        if self.app.app_state.is_authenticated().await {
            Ok(())
        } else {
            Err(BaseeraError::unauthorized("sign in first"))
        }
    }

    fn wizard_mut(&mut self) -> Result<&mut AnalysisWizard> {
        if self.location.view == View::NewAnalysis {
            Ok(&mut self.wizard)
        } else {
            Err(BaseeraError::invalid_input("open /analysis/new first"))
        }
    }

    async fn go(&mut self, path: &str) -> String {
        let mut navigation = self.app.app_state.navigate(path).await;
        if let View::AnalysisResults { id } = &navigation.view
            && let Err(e) = self.app.analysis.report(id)
            && e.is_not_found()
        {
            tracing::debug!("[Repl] {}", e);
            navigation.view = View::NotFound {
                path: navigation.location.path(),
            };
            navigation.layout = Layout::Bare;
        }
        if navigation.view == View::NewAnalysis && self.location.view != View::NewAnalysis {
            self.wizard = AnalysisWizard::new();
        }
        if navigation.was_redirected() {
            tracing::debug!(
                "[Repl] {} redirected to {}",
                navigation.requested,
                navigation.location
            );
        }
        self.location = navigation;
        self.render_location().await
    }

    /// Runs processing with live progress, then opens the result.
    async fn start(&mut self) -> Result<Outcome> {
        self.wizard_mut()?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let printer = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                println!("{}", render::processing_event(&event));
            }
        });

        let result = self.app.analysis.run(&mut self.wizard, Some(&tx)).await;
        drop(tx);
        let _ = printer.await;

        let analysis_id = result?;
        Ok(Outcome::Print(self.go(&format!("/analysis/{analysis_id}")).await))
    }

    async fn render_location(&self) -> String {
        let body = match &self.location.view {
            View::Login => render::login_view(),
            View::Dashboard => render::dashboard(&self.app.catalog.dashboard()),
            View::NewAnalysis => render::wizard(&self.wizard),
            View::AnalysisResults { id } => match self.app.analysis.report(id) {
                Ok(report) => render::report(&report),
                Err(_) => render::not_found(&self.location.location.path()),
            },
            View::Analyses => render::analyses(self.app.catalog.analyses()),
            View::Cases => render::cases(
                &self.app.catalog.filter_cases(&self.case_filter),
                &self.case_filter,
            ),
            View::Placeholder { section } => {
                render::placeholder(*section, &self.app.catalog.dashboard())
            }
            View::NotFound { path } => render::not_found(path),
        };

        match (self.location.layout, self.app.app_state.user().await) {
            (Layout::Shell, Some(user)) => {
                let shell = render::shell(
                    &user,
                    self.app.app_state.unread_count().await,
                    &self.location.location,
                    self.app.app_state.sidebar_collapsed().await,
                );
                format!("{shell}\n{body}\n{}", render::footer())
            }
            _ => body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseera_application::bootstrap;
    use baseera_core::analysis::ResultAction;
    use baseera_core::config::{LatencyConfig, RootConfig, RoutingConfig, UnknownAnalysisPolicy};
    use baseera_core::route::Route;

    async fn repl(start: &str) -> Repl {
        let config = RootConfig {
            latency: LatencyConfig::instant(),
            ..RootConfig::default()
        };
        Repl::new(bootstrap(config), start).await
    }

    #[tokio::test]
    async fn test_anonymous_start_lands_on_login() {
        let repl = repl("/cases").await;
        assert_eq!(repl.location.view, View::Login);
        assert_eq!(repl.location.location, Route::Root);
    }

    #[tokio::test]
    async fn test_login_opens_dashboard_and_logout_returns() {
        let mut repl = repl("/").await;
        repl.handle(Command::Login).await.unwrap();
        assert_eq!(repl.location.view, View::Dashboard);

        let again = repl.handle(Command::Login).await.unwrap();
        assert_eq!(again, Outcome::Print("Already signed in.".to_string()));

        repl.handle(Command::Logout).await.unwrap();
        assert_eq!(repl.location.view, View::Login);
        assert!(repl.handle(Command::Notifications).await.unwrap_err().is_unauthorized());
    }

    #[tokio::test]
    async fn test_read_notification() {
        let mut repl = repl("/").await;
        repl.handle(Command::Login).await.unwrap();

        let Outcome::Print(text) = repl.handle(Command::Read("notif_001".into())).await.unwrap()
        else {
            panic!("expected output");
        };
        assert!(text.contains("2 unread"));

        let Outcome::Print(text) = repl.handle(Command::Read("notif_001".into())).await.unwrap()
        else {
            panic!("expected output");
        };
        assert!(text.contains("already read"));

        let err = repl.handle(Command::Read("notif_999".into())).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_wizard_commands_need_the_wizard_view() {
        let mut repl = repl("/").await;
        repl.handle(Command::Login).await.unwrap();
        assert!(repl.handle(Command::Upload(None)).await.is_err());
        assert!(repl.handle(Command::Action(ResultAction::Approve)).await.is_err());
    }

    #[tokio::test]
    async fn test_full_analysis_flow() {
        let mut repl = repl("/").await;
        repl.handle(Command::Login).await.unwrap();
        repl.handle(Command::Go("/analysis/new".into())).await.unwrap();

        // Leaving the upload step needs a document
        assert!(repl.handle(Command::Next).await.unwrap_err().is_invalid_transition());

        repl.handle(Command::Upload(None)).await.unwrap();
        repl.handle(Command::Next).await.unwrap();
        assert_eq!(repl.wizard.step(), WizardStep::Configuring);
        repl.handle(Command::Set(Setting::Historical)).await.unwrap();
        assert!(!repl.wizard.settings().include_historical);

        repl.handle(Command::Start).await.unwrap();
        assert_eq!(
            repl.location.view,
            View::AnalysisResults {
                id: "ana_001".to_string()
            }
        );

        let Outcome::Print(text) = repl.handle(Command::Action(ResultAction::Approve)).await.unwrap()
        else {
            panic!("expected output");
        };
        assert!(text.contains("تم اعتماد القرار بنجاح"));

        // Re-entering the wizard starts over
        repl.handle(Command::Go("/analysis/new".into())).await.unwrap();
        assert_eq!(repl.wizard.step(), WizardStep::Uploading);
    }

    #[tokio::test]
    async fn test_strict_policy_renders_bare_not_found() {
        let config = RootConfig {
            latency: LatencyConfig::instant(),
            routing: RoutingConfig {
                unknown_analysis: UnknownAnalysisPolicy::NotFound,
            },
            ..RootConfig::default()
        };
        let mut repl = Repl::new(bootstrap(config), "/").await;
        repl.handle(Command::Login).await.unwrap();

        let Outcome::Print(text) = repl
            .handle(Command::Go("/analysis/ana_999".into()))
            .await
            .unwrap()
        else {
            panic!("expected output");
        };
        assert_eq!(
            repl.location.view,
            View::NotFound {
                path: "/analysis/ana_999".to_string()
            }
        );
        assert_eq!(repl.location.layout, Layout::Bare);
        assert!(!text.contains(&render::footer()));

        let err = repl
            .handle(Command::Action(ResultAction::Approve))
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());

        // Known ids still render normally
        repl.handle(Command::Go("/analysis/ana_002".into())).await.unwrap();
        assert_eq!(repl.location.layout, Layout::Shell);
        assert!(repl.handle(Command::Action(ResultAction::Archive)).await.is_ok());
    }

    #[tokio::test]
    async fn test_cases_command_filters() {
        let mut repl = repl("/").await;
        repl.handle(Command::Login).await.unwrap();

        let Outcome::Print(text) = repl
            .handle("cases بنك".parse().unwrap())
            .await
            .unwrap()
        else {
            panic!("expected output");
        };
        assert_eq!(repl.location.view, View::Cases);
        assert!(text.contains("case_004"));
        assert!(!text.contains("case_003"));
    }
}
