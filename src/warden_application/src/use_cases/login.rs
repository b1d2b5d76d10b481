use secrecy::{ExposeSecret, Secret};
use warden_core::{
    Account, AuthStatus, Clock, Credentials, CredentialsError, LOGIN_SUCCESSFUL, PasswordHasher,
    PasswordHasherError, SecurityEvent, SecurityEventKind, SecurityEventOutcome, SecurityLog,
    Session, SessionStore, SessionStoreError, UserStore, UserStoreError,
};

/// Raw login form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
    pub remember_me: bool,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            email: Some(Secret::new(email.into())),
            password: Some(Secret::new(password.into())),
            remember_me,
        }
    }

    fn subject(&self) -> String {
        self.email
            .as_ref()
            .map(|email| email.expose_secret().trim().to_string())
            .unwrap_or_default()
    }
}

/// An issued session together with the account it belongs to.
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    pub session: Session,
    pub account: Account,
}

/// Why credentials were refused. Only ever shown in the security log; the
/// caller sees the same message for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMismatch {
    UnknownAccount,
    WrongPassword,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    InvalidInput(#[from] CredentialsError),
    #[error("Invalid email or password")]
    AuthenticationFailed(CredentialMismatch),
    #[error("Account is disabled")]
    AccountDisabled,
    #[error("Internal server error")]
    Internal(String),
}

impl LoginError {
    pub fn status(&self) -> AuthStatus {
        match self {
            Self::InvalidInput(_) => AuthStatus::InputInvalid,
            Self::AuthenticationFailed(_) => AuthStatus::AuthenticationFailed,
            Self::AccountDisabled => AuthStatus::AccountDisabled,
            Self::Internal(_) => AuthStatus::InternalFault,
        }
    }

    /// Reason written to the security log.
    pub fn audit_reason(&self) -> String {
        match self {
            Self::InvalidInput(e) => e.to_string(),
            Self::AuthenticationFailed(CredentialMismatch::UnknownAccount) => {
                "User not found".to_string()
            }
            Self::AuthenticationFailed(CredentialMismatch::WrongPassword) => {
                "Invalid password".to_string()
            }
            Self::AccountDisabled => "Account disabled".to_string(),
            Self::Internal(_) => "Internal error".to_string(),
        }
    }
}

impl From<UserStoreError> for LoginError {
    fn from(error: UserStoreError) -> Self {
        Self::Internal(format!("user store: {error}"))
    }
}

impl From<SessionStoreError> for LoginError {
    fn from(error: SessionStoreError) -> Self {
        Self::Internal(format!("session store: {error}"))
    }
}

impl From<PasswordHasherError> for LoginError {
    fn from(error: PasswordHasherError) -> Self {
        Self::Internal(format!("password hasher: {error}"))
    }
}

/// Login use case - validates input, checks credentials and issues a session
pub struct LoginUseCase<'a, U, S, H, L>
where
    U: UserStore,
    S: SessionStore,
    H: PasswordHasher,
    L: SecurityLog,
{
    user_store: &'a U,
    session_store: &'a S,
    hasher: &'a H,
    security_log: &'a L,
    clock: &'a dyn Clock,
}

impl<'a, U, S, H, L> LoginUseCase<'a, U, S, H, L>
where
    U: UserStore,
    S: SessionStore,
    H: PasswordHasher,
    L: SecurityLog,
{
    pub fn new(
        user_store: &'a U,
        session_store: &'a S,
        hasher: &'a H,
        security_log: &'a L,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            user_store,
            session_store,
            hasher,
            security_log,
            clock,
        }
    }

    /// Execute the login use case
    ///
    /// Every attempt is written to the security log, whatever its result.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginSuccess, LoginError> {
        let subject = request.subject();
        let result = self.authenticate(request).await;

        if let Err(LoginError::Internal(cause)) = &result {
            tracing::error!(error = %cause, "Login failed unexpectedly");
        }
        self.record_attempt(subject, &result).await;

        result
    }

    async fn authenticate(&self, request: LoginRequest) -> Result<LoginSuccess, LoginError> {
        let credentials =
            Credentials::parse(request.email, request.password, request.remember_me)?;

        let mut account = match self.user_store.get_account(&credentials.email).await {
            Ok(account) => account,
            Err(UserStoreError::AccountNotFound) => {
                return Err(LoginError::AuthenticationFailed(
                    CredentialMismatch::UnknownAccount,
                ));
            }
            Err(e) => return Err(e.into()),
        };

        if !account.is_active() {
            return Err(LoginError::AccountDisabled);
        }

        let matches = self
            .hasher
            .verify(&credentials.password, account.password_digest())
            .await?;
        if !matches {
            return Err(LoginError::AuthenticationFailed(
                CredentialMismatch::WrongPassword,
            ));
        }

        let session = self
            .session_store
            .create(account.email().clone(), credentials.remember_me)
            .await?;

        if let Err(e) = self
            .user_store
            .touch_last_login(account.email(), session.created_at())
            .await
        {
            // Don't leave a live session behind for a login we report as failed.
            if let Err(revoke_error) = self.session_store.revoke(session.token()).await {
                tracing::warn!(
                    error = %revoke_error,
                    "Failed to revoke session after last login update failed"
                );
            }
            return Err(e.into());
        }
        account.record_login(session.created_at());

        Ok(LoginSuccess { session, account })
    }

    async fn record_attempt(&self, subject: String, result: &Result<LoginSuccess, LoginError>) {
        let (outcome, reason) = match result {
            Ok(_) => (SecurityEventOutcome::Success, LOGIN_SUCCESSFUL.to_string()),
            Err(e) => (SecurityEventOutcome::Failure, e.audit_reason()),
        };
        let event = SecurityEvent::new(
            self.clock.now(),
            SecurityEventKind::Login,
            outcome,
            subject,
            reason,
        );
        self.security_log.record(event).await;
    }
}
