pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, PasswordDigest},
    auth_outcome::{AuthOutcome, AuthStatus, LOGIN_SUCCESSFUL},
    credentials::{Credentials, CredentialsError},
    email::{Email, EmailError},
    password::{MIN_PASSWORD_LENGTH, Password, PasswordError},
    security_event::{SecurityEvent, SecurityEventKind, SecurityEventOutcome},
    session::{Session, SessionPolicy},
    session_token::SessionToken,
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
    services::{Clock, PasswordHasher, PasswordHasherError, SecurityLog},
};
