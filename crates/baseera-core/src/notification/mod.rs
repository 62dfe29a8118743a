//! Notification domain module.
//!
//! - `model`: Notification record and its category
//! - `store`: Ordered notification store with a live unread count
//! - `fixtures`: Notifications seeded at startup

mod fixtures;
mod model;
mod store;

pub use fixtures::default_notifications;
pub use model::{Notification, NotificationCategory};
pub use store::NotificationStore;
