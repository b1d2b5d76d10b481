use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};

use crate::domain::email::Email;

/// Stored output of a `PasswordHasher`. Never the plaintext.
#[derive(Debug, Clone)]
pub struct PasswordDigest(Secret<String>);

impl PasswordDigest {
    pub fn new(digest: String) -> Self {
        Self(Secret::new(digest))
    }
}

impl AsRef<Secret<String>> for PasswordDigest {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for PasswordDigest {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

/// A registered account, keyed by its normalized email.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    email: Email,
    password_digest: PasswordDigest,
    display_name: String,
    active: bool,
    created_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

impl Account {
    pub fn new(
        email: Email,
        password_digest: PasswordDigest,
        display_name: impl Into<String>,
        active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            password_digest,
            display_name: display_name.into(),
            active,
            created_at,
            last_login: None,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        self.last_login
    }

    pub fn record_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
