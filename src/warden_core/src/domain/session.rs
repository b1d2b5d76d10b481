use chrono::{DateTime, Duration, Utc};

use crate::domain::{email::Email, session_token::SessionToken};

/// How long sessions stay valid.
///
/// Persistent ("remember me") sessions live for a fixed period measured from
/// creation. Other sessions expire after a period of inactivity; every
/// successful validation moves that deadline forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub idle_timeout: Duration,
    pub persistent_lifetime: Duration,
}

impl SessionPolicy {
    pub const DEFAULT_IDLE_TIMEOUT_MINUTES: i64 = 30;
    pub const DEFAULT_PERSISTENT_LIFETIME_DAYS: i64 = 30;

    pub fn new(idle_timeout: Duration, persistent_lifetime: Duration) -> Self {
        Self {
            idle_timeout,
            persistent_lifetime,
        }
    }
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::minutes(Self::DEFAULT_IDLE_TIMEOUT_MINUTES),
            persistent_lifetime: Duration::days(Self::DEFAULT_PERSISTENT_LIFETIME_DAYS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: SessionToken,
    account_email: Email,
    created_at: DateTime<Utc>,
    last_accessed: DateTime<Utc>,
    persistent: bool,
}

impl Session {
    pub fn new(
        token: SessionToken,
        account_email: Email,
        persistent: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            account_email,
            created_at: now,
            last_accessed: now,
            persistent,
        }
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }

    pub fn account_email(&self) -> &Email {
        &self.account_email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_accessed(&self) -> DateTime<Utc> {
        self.last_accessed
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// The instant after which the session is no longer valid. A deadline
    /// past the representable range saturates to `DateTime::<Utc>::MAX_UTC`.
    pub fn expires_at(&self, policy: &SessionPolicy) -> DateTime<Utc> {
        let (from, lifetime) = if self.persistent {
            (self.created_at, policy.persistent_lifetime)
        } else {
            (self.last_accessed, policy.idle_timeout)
        };
        from.checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// A session is still valid at exactly its deadline.
    pub fn is_expired(&self, now: DateTime<Utc>, policy: &SessionPolicy) -> bool {
        now > self.expires_at(policy)
    }

    /// Records activity. The last access time never moves backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed = self.last_accessed.max(now);
    }
}
