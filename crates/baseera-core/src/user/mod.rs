//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User identity record and the fixture identity
//! - `service`: Identity provider boundary used by login
//!
//! # Usage
//!
//! ```ignore
//! use baseera_core::user::{User, IdentityProvider, FixtureIdentityProvider};
//! ```

mod model;
mod service;

// Re-export public API
pub use model::{User, default_user};
pub use service::{FixtureIdentityProvider, IdentityProvider};
