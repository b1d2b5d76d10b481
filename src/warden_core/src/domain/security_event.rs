use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityEventKind {
    Login,
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityEventOutcome {
    Success,
    Failure,
}

/// One entry of the security log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityEvent {
    pub at: DateTime<Utc>,
    pub kind: SecurityEventKind,
    pub outcome: SecurityEventOutcome,
    /// The email as the client submitted it, which may not be a valid address.
    pub subject: String,
    pub reason: String,
}

impl SecurityEvent {
    pub fn new(
        at: DateTime<Utc>,
        kind: SecurityEventKind,
        outcome: SecurityEventOutcome,
        subject: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            at,
            kind,
            outcome,
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == SecurityEventOutcome::Success
    }
}

impl fmt::Display for SecurityEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => f.write_str("LOGIN"),
            Self::Logout => f.write_str("LOGOUT"),
        }
    }
}

impl fmt::Display for SecurityEventOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("SUCCESS"),
            Self::Failure => f.write_str("FAILURE"),
        }
    }
}

impl fmt::Display for SecurityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}: {} - {}",
            self.at.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.kind,
            self.outcome,
            self.subject,
            self.reason
        )
    }
}
