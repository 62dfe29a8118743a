//! Application state container.
//!
//! One `AppState` is created when the application starts and dropped when it
//! exits. Every mutation goes through a named method so that state
//! transitions can be exercised without any presentation layer.

use serde::{Deserialize, Serialize};

use crate::notification::{Notification, NotificationStore};
use crate::route::{Navigation, navigate};
use crate::session::Session;
use crate::user::User;

/// Presentation flags that belong to the shell rather than a single view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlags {
    pub sidebar_collapsed: bool,
}

/// Change published after a mutation that altered the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    LoggedIn { user_id: String },
    LoggedOut,
    NotificationRead { id: String, unread_count: usize },
    SidebarToggled { collapsed: bool },
}

/// Session, notifications and shell flags for one running instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    session: Session,
    notifications: NotificationStore,
    ui: UiFlags,
}

impl AppState {
    /// Creates the startup state: anonymous session, fixture notifications,
    /// expanded sidebar.
    pub fn new() -> Self {
        Self::with_notifications(NotificationStore::with_defaults())
    }

    pub fn with_notifications(notifications: NotificationStore) -> Self {
        Self {
            session: Session::new(),
            notifications,
            ui: UiFlags::default(),
        }
    }

    // ============================================================================
    // Session
    // ============================================================================

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    /// Logs in with the fixture identity.
    pub fn login(&mut self) -> AppEvent {
        self.session.login();
        self.logged_in_event()
    }

    /// Logs in with an identity resolved by an identity provider.
    pub fn login_as(&mut self, user: User) -> AppEvent {
        self.session.login_as(user);
        self.logged_in_event()
    }

    fn logged_in_event(&self) -> AppEvent {
        AppEvent::LoggedIn {
            user_id: self.user().map(|u| u.id.clone()).unwrap_or_default(),
        }
    }

    /// Logs out. Returns `None` when the session was already anonymous.
    pub fn logout(&mut self) -> Option<AppEvent> {
        if !self.session.is_authenticated() {
            return None;
        }
        self.session.logout();
        Some(AppEvent::LoggedOut)
    }

    /// Resolves `path` against the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        navigate(path, &self.session)
    }

    // ============================================================================
    // Notifications
    // ============================================================================

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.list()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.unread_count()
    }

    /// Marks a notification as read. Returns `None` when nothing changed
    /// (unknown id or already read).
    pub fn mark_as_read(&mut self, id: &str) -> Option<AppEvent> {
        self.notifications
            .mark_as_read(id)
            .then(|| AppEvent::NotificationRead {
                id: id.to_string(),
                unread_count: self.notifications.unread_count(),
            })
    }

    // ============================================================================
    // Shell flags
    // ============================================================================

    pub fn ui(&self) -> &UiFlags {
        &self.ui
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.ui.sidebar_collapsed
    }

    pub fn toggle_sidebar(&mut self) -> AppEvent {
        self.ui.sidebar_collapsed = !self.ui.sidebar_collapsed;
        AppEvent::SidebarToggled {
            collapsed: self.ui.sidebar_collapsed,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::View;

    #[test]
    fn test_new() {
        let state = AppState::new();
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert_eq!(state.notifications().len(), 6);
        assert_eq!(state.unread_count(), 3);
        assert!(!state.sidebar_collapsed());
    }

    #[test]
    fn test_login_logout_scenario() {
        let mut state = AppState::new();
        assert!(!state.is_authenticated());

        let event = state.login();
        assert_eq!(
            event,
            AppEvent::LoggedIn {
                user_id: "usr_001".to_string()
            }
        );
        assert!(state.is_authenticated());
        assert!(!state.user().unwrap().name.is_empty());

        assert_eq!(state.logout(), Some(AppEvent::LoggedOut));
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
        assert_eq!(state.logout(), None);
    }

    #[test]
    fn test_mark_as_read_scenario() {
        let mut state = AppState::new();
        assert_eq!(state.unread_count(), 3);

        assert_eq!(
            state.mark_as_read("notif_001"),
            Some(AppEvent::NotificationRead {
                id: "notif_001".to_string(),
                unread_count: 2
            })
        );
        assert_eq!(state.unread_count(), 2);

        assert_eq!(state.mark_as_read("notif_999"), None);
        assert_eq!(state.unread_count(), 2);

        assert_eq!(state.mark_as_read("notif_001"), None);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut state = AppState::new();
        assert_eq!(
            state.toggle_sidebar(),
            AppEvent::SidebarToggled { collapsed: true }
        );
        assert_eq!(
            state.toggle_sidebar(),
            AppEvent::SidebarToggled { collapsed: false }
        );
    }

    #[test]
    fn test_logout_keeps_notifications_and_flags() {
        let mut state = AppState::new();
        state.login();
        state.mark_as_read("notif_002");
        state.toggle_sidebar();

        state.logout();
        assert_eq!(state.unread_count(), 2);
        assert!(state.sidebar_collapsed());
    }

    #[test]
    fn test_navigate_follows_session() {
        let mut state = AppState::new();
        assert_eq!(state.navigate("/dashboard").view, View::Login);
        state.login();
        assert_eq!(state.navigate("/").view, View::Dashboard);
    }
}
