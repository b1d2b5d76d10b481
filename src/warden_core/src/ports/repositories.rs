use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    account::Account,
    email::Email,
    session::{Session, SessionPolicy},
    session_token::SessionToken,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Accounts keyed by normalized email. Accounts are never removed.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_account(&self, account: Account) -> Result<(), UserStoreError>;
    async fn get_account(&self, email: &Email) -> Result<Account, UserStoreError>;
    async fn touch_last_login(
        &self,
        email: &Email,
        at: DateTime<Utc>,
    ) -> Result<(), UserStoreError>;
    async fn set_active(&self, email: &Email, active: bool) -> Result<(), UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Live sessions keyed by token, with expiry enforced on access.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Starts a session for `account_email` under a token no live session uses.
    async fn create(
        &self,
        account_email: Email,
        persistent: bool,
    ) -> Result<Session, SessionStoreError>;

    /// Checks the session and, in the same step, either refreshes its last
    /// access time and returns it, or evicts it if it has expired.
    async fn validate_and_get(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Session>, SessionStoreError>;

    async fn validate(&self, token: &SessionToken) -> Result<bool, SessionStoreError> {
        Ok(self.validate_and_get(token).await?.is_some())
    }

    /// Removes the session, returning it if it existed.
    async fn revoke(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError>;

    /// Read-only lookup. Does not check expiry or refresh the session.
    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError>;

    /// Evicts every expired session, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, SessionStoreError>;

    /// The expiry rules this store enforces.
    fn policy(&self) -> SessionPolicy;
}
