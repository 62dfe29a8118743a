//! Application state service.
//!
//! Owns the single [`AppState`] for the running instance and is the only way
//! views mutate it. Every mutation that changes the state is published on a
//! broadcast channel so observers can re-render.

use std::sync::Arc;

use baseera_core::notification::Notification;
use baseera_core::route::Navigation;
use baseera_core::user::{IdentityProvider, User};
use baseera_core::{AppEvent, AppState, Result};
use tokio::sync::{RwLock, broadcast};

/// Capacity of the change-event channel. Slow observers that fall this far
/// behind see a `Lagged` error and should re-read the state.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Service wrapping the application state.
///
/// Cloning is cheap and every clone shares the same state and event channel.
#[derive(Clone)]
pub struct AppStateService {
    state: Arc<RwLock<AppState>>,
    identity_provider: Arc<dyn IdentityProvider>,
    events: broadcast::Sender<AppEvent>,
}

impl AppStateService {
    /// Creates a service over the startup state.
    pub fn new(identity_provider: Arc<dyn IdentityProvider>) -> Self {
        Self::with_state(AppState::new(), identity_provider)
    }

    pub fn with_state(state: AppState, identity_provider: Arc<dyn IdentityProvider>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(state)),
            identity_provider,
            events,
        }
    }

    /// Subscribes to change events published after each mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: AppEvent) {
        tracing::debug!("[AppState] {:?}", event);
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    // ============================================================================
    // Session
    // ============================================================================

    /// Logs in through the identity provider.
    ///
    /// The provider runs before the state lock is taken, so readers are never
    /// blocked by the simulated exchange.
    pub async fn login(&self) -> Result<User> {
        tracing::info!("[Session] Login requested");
        let user = self.identity_provider.authenticate().await?;

        let event = {
            let mut state = self.state.write().await;
            state.login_as(user.clone())
        };
        tracing::info!("[Session] Logged in as {}", user.id);
        self.publish(event);
        Ok(user)
    }

    pub async fn logout(&self) {
        let event = self.state.write().await.logout();
        match event {
            Some(event) => {
                tracing::info!("[Session] Logged out");
                self.publish(event);
            }
            None => tracing::debug!("[Session] Logout while anonymous, nothing to do"),
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    pub async fn navigate(&self, path: &str) -> Navigation {
        let navigation = self.state.read().await.navigate(path);
        tracing::debug!(
            "[Router] {} rendered {:?} at {}",
            navigation.requested,
            navigation.view,
            navigation.location
        );
        navigation
    }

    // ============================================================================
    // Notifications
    // ============================================================================

    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.read().await.notifications().to_vec()
    }

    pub async fn unread_count(&self) -> usize {
        self.state.read().await.unread_count()
    }

    /// Marks a notification as read. Returns whether anything changed.
    pub async fn mark_as_read(&self, id: &str) -> bool {
        let event = self.state.write().await.mark_as_read(id);
        match event {
            Some(event) => {
                self.publish(event);
                true
            }
            None => {
                tracing::debug!("[Notifications] {} unknown or already read", id);
                false
            }
        }
    }

    // ============================================================================
    // Shell flags
    // ============================================================================

    pub async fn sidebar_collapsed(&self) -> bool {
        self.state.read().await.sidebar_collapsed()
    }

    /// Toggles the sidebar and returns the new collapsed flag.
    pub async fn toggle_sidebar(&self) -> bool {
        let event = self.state.write().await.toggle_sidebar();
        let collapsed = matches!(event, AppEvent::SidebarToggled { collapsed: true });
        self.publish(event);
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseera_core::route::View;
    use baseera_core::user::FixtureIdentityProvider;

    fn service() -> AppStateService {
        AppStateService::new(Arc::new(FixtureIdentityProvider::new()))
    }

    #[tokio::test]
    async fn test_login_publishes_event() {
        let service = service();
        let mut events = service.subscribe();

        let user = service.login().await.unwrap();
        assert!(!user.name.is_empty());
        assert!(service.is_authenticated().await);
        assert_eq!(
            events.recv().await.unwrap(),
            AppEvent::LoggedIn {
                user_id: user.id.clone()
            }
        );
    }

    #[tokio::test]
    async fn test_logout_while_anonymous_publishes_nothing() {
        let service = service();
        let mut events = service.subscribe();

        service.logout().await;
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_mark_as_read_publishes_only_on_change() {
        let service = service();
        let mut events = service.subscribe();

        assert!(service.mark_as_read("notif_001").await);
        assert!(!service.mark_as_read("notif_001").await);
        assert!(!service.mark_as_read("notif_999").await);

        assert_eq!(
            events.recv().await.unwrap(),
            AppEvent::NotificationRead {
                id: "notif_001".to_string(),
                unread_count: 2
            }
        );
        assert!(events.try_recv().is_err());
        assert_eq!(service.unread_count().await, 2);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let service = service();
        let other = service.clone();

        other.login().await.unwrap();
        assert!(service.is_authenticated().await);
        assert_eq!(service.navigate("/").await.view, View::Dashboard);
    }

    #[tokio::test]
    async fn test_toggle_sidebar() {
        let service = service();
        assert!(service.toggle_sidebar().await);
        assert!(service.sidebar_collapsed().await);
        assert!(!service.toggle_sidebar().await);
    }
}
