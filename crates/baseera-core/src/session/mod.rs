//! Session and authentication state.

mod model;

pub use model::Session;
