//! Domain core for Baseera.
//!
//! Holds the session and authorization gate, the notification store, the
//! route table, the new-analysis wizard and the fixture catalog. Nothing in
//! this crate renders or performs I/O beyond reading configuration values.

pub mod analysis;
pub mod app_state;
pub mod case;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notification;
pub mod route;
pub mod session;
pub mod stats;
pub mod user;

// Re-export common types
pub use app_state::{AppEvent, AppState, UiFlags};
pub use catalog::{Catalog, DashboardSummary};
pub use error::{BaseeraError, Result};
