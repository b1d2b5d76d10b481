use warden_core::{
    Clock, SecurityEvent, SecurityEventKind, SecurityEventOutcome, SecurityLog, SessionStore,
    SessionStoreError, SessionToken,
};

const LOGOUT_SUCCESSFUL: &str = "Logout successful";

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Logout use case - revokes a session
pub struct LogoutUseCase<'a, S, L>
where
    S: SessionStore,
    L: SecurityLog,
{
    session_store: &'a S,
    security_log: &'a L,
    clock: &'a dyn Clock,
}

impl<'a, S, L> LogoutUseCase<'a, S, L>
where
    S: SessionStore,
    L: SecurityLog,
{
    pub fn new(session_store: &'a S, security_log: &'a L, clock: &'a dyn Clock) -> Self {
        Self {
            session_store,
            security_log,
            clock,
        }
    }

    /// Execute the logout use case
    ///
    /// # Returns
    /// Whether a session was actually revoked. Unknown tokens are not an error.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &SessionToken) -> Result<bool, LogoutError> {
        let Some(session) = self.session_store.revoke(token).await? else {
            return Ok(false);
        };

        let event = SecurityEvent::new(
            self.clock.now(),
            SecurityEventKind::Logout,
            SecurityEventOutcome::Success,
            session.account_email().to_string(),
            LOGOUT_SUCCESSFUL,
        );
        self.security_log.record(event).await;

        Ok(true)
    }
}
