use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{account::PasswordDigest, password::Password, security_event::SecurityEvent};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),
    #[error("Hashing failed: {0}")]
    HashingFailed(String),
}

/// One-way password digest. `verify` answers `Ok(false)` for a wrong
/// password and reserves errors for faults.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError>;
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError>;
}

/// Append-only sink for authentication events. Recording must not fail.
#[async_trait]
pub trait SecurityLog: Send + Sync {
    async fn record(&self, event: SecurityEvent);
}

/// Records to both logs, e.g. an in-memory trail next to `tracing` output.
#[async_trait]
impl<A, B> SecurityLog for (A, B)
where
    A: SecurityLog,
    B: SecurityLog,
{
    async fn record(&self, event: SecurityEvent) {
        self.0.record(event.clone()).await;
        self.1.record(event).await;
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
