use secrecy::{ExposeSecret, Secret};

use crate::domain::{
    email::{Email, EmailError},
    password::{Password, PasswordError},
};

/// Field-level rejection of a login form. The message is safe to show next
/// to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("{0}")]
    Email(#[from] EmailError),
    #[error("{0}")]
    Password(#[from] PasswordError),
}

/// A login attempt whose fields passed input validation.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: Email,
    pub password: Password,
    pub remember_me: bool,
}

impl Credentials {
    /// Validates raw form input. Presence of both fields is checked before
    /// their format so that an empty form reports the email first.
    pub fn parse(
        email: Option<Secret<String>>,
        password: Option<Secret<String>>,
        remember_me: bool,
    ) -> Result<Self, CredentialsError> {
        let email = email
            .filter(|e| !e.expose_secret().trim().is_empty())
            .ok_or(EmailError::Missing)?;
        let password = password
            .filter(|p| !p.expose_secret().is_empty())
            .ok_or(PasswordError::Missing)?;

        let email = Email::parse(&email)?;
        let password = Password::parse(password)?;

        Ok(Self {
            email,
            password,
            remember_me,
        })
    }
}
