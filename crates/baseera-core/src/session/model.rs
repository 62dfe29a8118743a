//! Session model.
//!
//! The session has exactly two states, anonymous and authenticated, and the
//! authenticated flag is always derived from the presence of a user.

use serde::{Deserialize, Serialize};

use crate::user::{User, default_user};

/// Authentication state of the current user within one running instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Creates an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticates the session with the fixture identity.
    pub fn login(&mut self) {
        self.login_as(default_user());
    }

    /// Authenticates the session with an identity resolved elsewhere.
    ///
    /// Logging in while already authenticated replaces the identity.
    pub fn login_as(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Clears the identity. Calling this on an anonymous session does nothing.
    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
