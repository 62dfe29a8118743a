//! Ordered notification store.
//!
//! The unread count is never stored. It is recomputed from the records on
//! every call, so it cannot drift from the read flags.

use serde::{Deserialize, Serialize};

use super::fixtures::default_notifications;
use super::model::Notification;

/// Holds the notifications in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
}

impl NotificationStore {
    /// Creates a store over the given records, keeping their order.
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Creates a store seeded with the fixture notifications.
    pub fn with_defaults() -> Self {
        Self::new(default_notifications())
    }

    /// Returns all notifications in display order.
    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn unread(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.is_unread())
    }

    pub fn unread_count(&self) -> usize {
        self.unread().count()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Marks the notification with `id` as read.
    ///
    /// Unknown ids leave the store untouched. A record is never un-read.
    /// Returns `true` only when a read flag actually flipped, so repeated
    /// calls with the same id report a change at most once.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) if !notification.read => {
                notification.read = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationCategory;
    use proptest::prelude::*;

    #[test]
    fn test_fixture_scenario() {
        let mut store = NotificationStore::with_defaults();
        assert_eq!(store.len(), 6);
        assert_eq!(store.unread_count(), 3);

        assert!(store.mark_as_read("notif_001"));
        assert_eq!(store.unread_count(), 2);

        assert!(!store.mark_as_read("notif_999"));
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn test_mark_as_read_is_idempotent() {
        let mut once = NotificationStore::with_defaults();
        once.mark_as_read("notif_002");

        let mut twice = NotificationStore::with_defaults();
        assert!(twice.mark_as_read("notif_002"));
        assert!(!twice.mark_as_read("notif_002"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_mark_as_read_keeps_order_and_other_records() {
        let original = NotificationStore::with_defaults();
        let mut store = original.clone();
        store.mark_as_read("notif_003");

        for (before, after) in original.list().iter().zip(store.list()) {
            assert_eq!(before.id, after.id);
            if before.id == "notif_003" {
                assert!(after.read);
                assert_eq!(before.title, after.title);
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn test_already_read_stays_read() {
        let mut store = NotificationStore::with_defaults();
        assert!(store.get("notif_004").unwrap().read);
        assert!(!store.mark_as_read("notif_004"));
        assert!(store.get("notif_004").unwrap().read);
    }

    #[test]
    fn test_empty_store() {
        let mut store = NotificationStore::default();
        assert!(store.is_empty());
        assert_eq!(store.unread_count(), 0);
        assert!(!store.mark_as_read("anything"));
    }

    #[test]
    fn test_unread_iterator_preserves_order() {
        let store = NotificationStore::with_defaults();
        let categories: Vec<NotificationCategory> = store.unread().map(|n| n.category).collect();
        assert_eq!(
            categories,
            [
                NotificationCategory::Analysis,
                NotificationCategory::Case,
                NotificationCategory::Report
            ]
        );
    }

    fn id_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u32..=6).prop_map(|n| format!("notif_{n:03}")),
            Just("notif_999".to_string()),
            "[a-z_]{0,8}",
        ]
    }

    proptest! {
        #[test]
        fn prop_unread_count_matches_untouched_unread(ids in prop::collection::vec(id_strategy(), 0..20)) {
            let mut store = NotificationStore::with_defaults();
            for id in &ids {
                store.mark_as_read(id);
            }

            let expected = default_notifications()
                .iter()
                .filter(|n| !n.read && !ids.contains(&n.id))
                .count();
            prop_assert_eq!(store.unread_count(), expected);
        }

        #[test]
        fn prop_mark_twice_equals_once(ids in prop::collection::vec(id_strategy(), 0..10)) {
            let mut once = NotificationStore::with_defaults();
            let mut twice = NotificationStore::with_defaults();
            for id in &ids {
                once.mark_as_read(id);
                twice.mark_as_read(id);
                twice.mark_as_read(id);
            }
            prop_assert_eq!(once, twice);
        }
    }
}
