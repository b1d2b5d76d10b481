use std::sync::Arc;

use warden_core::{
    Account, AuthOutcome, Clock, Email, PasswordHasher, SecurityLog, SessionPolicy, SessionStore,
    SessionToken, UserStore, UserStoreError,
};

use crate::use_cases::{
    LoginRequest, LoginUseCase, LogoutError, LogoutUseCase, SessionAccountError,
    SessionAccountUseCase,
};

/// Entry point for authentication. Composes the account store, session
/// store, password hasher and security log.
///
/// Expected failures come back as an [`AuthOutcome`] or a plain `false` /
/// `None`; lower-layer faults are logged here and never handed to callers.
#[derive(Clone)]
pub struct AuthService<U, S, H, L> {
    user_store: U,
    session_store: S,
    hasher: H,
    security_log: L,
    clock: Arc<dyn Clock>,
}

impl<U, S, H, L> AuthService<U, S, H, L>
where
    U: UserStore,
    S: SessionStore,
    H: PasswordHasher,
    L: SecurityLog,
{
    pub fn new(
        user_store: U,
        session_store: S,
        hasher: H,
        security_log: L,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_store,
            session_store,
            hasher,
            security_log,
            clock,
        }
    }

    pub async fn authenticate(&self, request: LoginRequest) -> AuthOutcome {
        let use_case = LoginUseCase::new(
            &self.user_store,
            &self.session_store,
            &self.hasher,
            &self.security_log,
            self.clock.as_ref(),
        );

        match use_case.execute(request).await {
            Ok(success) => AuthOutcome::success(success.session.token().clone(), success.account),
            Err(e) => AuthOutcome::rejected(e.status(), e.to_string()),
        }
    }

    /// Returns whether a session was actually revoked.
    pub async fn logout(&self, token: &SessionToken) -> bool {
        self.try_logout(token).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Logout failed unexpectedly");
            false
        })
    }

    /// Like [`Self::logout`], but hands store faults to the caller.
    pub async fn try_logout(&self, token: &SessionToken) -> Result<bool, LogoutError> {
        LogoutUseCase::new(&self.session_store, &self.security_log, self.clock.as_ref())
            .execute(token)
            .await
    }

    pub async fn validate_session(&self, token: &SessionToken) -> bool {
        self.session_store
            .validate(token)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Session validation failed unexpectedly");
                false
            })
    }

    pub async fn account_for_session(&self, token: &SessionToken) -> Option<Account> {
        self.try_account_for_session(token)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Session lookup failed unexpectedly");
                None
            })
    }

    /// Like [`Self::account_for_session`], but hands store faults to the caller.
    pub async fn try_account_for_session(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Account>, SessionAccountError> {
        SessionAccountUseCase::new(&self.user_store, &self.session_store)
            .execute(token)
            .await
    }

    #[tracing::instrument(name = "AuthService::set_account_active", skip(self))]
    pub async fn set_account_active(
        &self,
        email: &Email,
        active: bool,
    ) -> Result<(), UserStoreError> {
        self.user_store.set_active(email, active).await
    }

    pub fn user_store(&self) -> &U {
        &self.user_store
    }

    /// Expiry rules of the sessions this service issues.
    pub fn session_policy(&self) -> SessionPolicy {
        self.session_store.policy()
    }

    pub fn session_store(&self) -> &S {
        &self.session_store
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
