use warden_core::{
    Account, SessionStore, SessionStoreError, SessionToken, UserStore, UserStoreError,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionAccountError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Resolves a session token to the account that owns it.
pub struct SessionAccountUseCase<'a, U, S>
where
    U: UserStore,
    S: SessionStore,
{
    user_store: &'a U,
    session_store: &'a S,
}

impl<'a, U, S> SessionAccountUseCase<'a, U, S>
where
    U: UserStore,
    S: SessionStore,
{
    pub fn new(user_store: &'a U, session_store: &'a S) -> Self {
        Self {
            user_store,
            session_store,
        }
    }

    /// Validates the session (refreshing or evicting it) and returns its
    /// account only if the session is still valid and the account still exists.
    #[tracing::instrument(name = "SessionAccountUseCase::execute", skip_all)]
    pub async fn execute(&self, token: &SessionToken) -> Result<Option<Account>, SessionAccountError> {
        let Some(session) = self.session_store.validate_and_get(token).await? else {
            return Ok(None);
        };

        match self.user_store.get_account(session.account_email()).await {
            Ok(account) => Ok(Some(account)),
            Err(UserStoreError::AccountNotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
