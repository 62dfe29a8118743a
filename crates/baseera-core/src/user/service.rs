//! Identity provider boundary.
//!
//! Login goes through this trait so that the fixture identity can later be
//! replaced by a real credential exchange without touching the callers.

use std::time::Duration;

use async_trait::async_trait;

use super::model::{User, default_user};
use crate::error::Result;

/// Resolves the identity of the user who is logging in.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Performs the exchange and returns the verified identity.
    async fn authenticate(&self) -> Result<User>;
}

/// Identity provider backed by the fixture user.
///
/// Always succeeds. An optional delay simulates the latency of a real
/// credential exchange.
#[derive(Debug, Clone, Default)]
pub struct FixtureIdentityProvider {
    latency: Duration,
}

impl FixtureIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl IdentityProvider for FixtureIdentityProvider {
    async fn authenticate(&self) -> Result<User> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(default_user())
    }
}
