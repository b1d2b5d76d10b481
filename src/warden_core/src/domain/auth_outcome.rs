use crate::domain::{account::Account, session_token::SessionToken};

pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// Classification of an authentication attempt. Field errors are safe to
/// show inline; everything else is shown as a generic notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Success,
    InputInvalid,
    AuthenticationFailed,
    AccountDisabled,
    InternalFault,
}

/// Result of one authentication attempt.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    status: AuthStatus,
    message: String,
    token: Option<SessionToken>,
    account: Option<Account>,
}

impl AuthOutcome {
    pub fn success(token: SessionToken, account: Account) -> Self {
        Self {
            status: AuthStatus::Success,
            message: LOGIN_SUCCESSFUL.to_string(),
            token: Some(token),
            account: Some(account),
        }
    }

    pub fn rejected(status: AuthStatus, message: impl Into<String>) -> Self {
        debug_assert_ne!(status, AuthStatus::Success);
        Self {
            status,
            message: message.into(),
            token: None,
            account: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AuthStatus::Success
    }

    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }
}
