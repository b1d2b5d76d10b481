use std::time::Duration;

use secrecy::Secret;
use thiserror::Error;
use tokio::task::JoinHandle;
use warden_core::{
    Account, Clock, Email, EmailError, Password, PasswordError, PasswordHasher,
    PasswordHasherError, SessionStore, UserStore, UserStoreError,
};

/// An account to create at startup.
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub display_name: &'static str,
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        email: "admin@example.com",
        password: "password123",
        display_name: "Admin User",
    },
    DemoAccount {
        email: "user@example.com",
        password: "userpass",
        display_name: "Regular User",
    },
    DemoAccount {
        email: "demo@example.com",
        password: "demo123",
        display_name: "Demo User",
    },
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid seed email: {0}")]
    Email(#[from] EmailError),
    #[error("Invalid seed password: {0}")]
    Password(#[from] PasswordError),
    #[error("Failed to hash seed password: {0}")]
    Hasher(#[from] PasswordHasherError),
    #[error("Failed to store seed account: {0}")]
    UserStore(#[from] UserStoreError),
}

/// Creates the given accounts as active, hashing their passwords with `hasher`.
#[tracing::instrument(name = "Seeding accounts", skip_all, fields(count = accounts.len()))]
pub async fn seed_accounts<U, H>(
    user_store: &U,
    hasher: &H,
    clock: &dyn Clock,
    accounts: &[DemoAccount],
) -> Result<(), SeedError>
where
    U: UserStore,
    H: PasswordHasher,
{
    for seed in accounts {
        let email = Email::parse(&Secret::new(seed.email.to_string()))?;
        let password = Password::parse(Secret::new(seed.password.to_string()))?;
        let digest = hasher.hash(&password).await?;

        let account = Account::new(email, digest, seed.display_name, true, clock.now());
        user_store.add_account(account).await?;
    }
    Ok(())
}

/// Periodically evicts expired sessions so abandoned ones don't pile up.
pub fn spawn_session_sweeper<S>(session_store: S, every: Duration) -> JoinHandle<()>
where
    S: SessionStore + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            match session_store.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!(removed, "Purged expired sessions"),
                Err(e) => tracing::error!(error = %e, "Failed to purge expired sessions"),
            }
        }
    })
}
