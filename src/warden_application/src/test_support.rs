//! In-memory doubles for the ports, shared by the use case tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use warden_core::{
    Account, Clock, Email, Password, PasswordDigest, PasswordHasher, PasswordHasherError,
    SecurityEvent, SecurityLog, Session, SessionPolicy, SessionStore, SessionStoreError,
    SessionToken, UserStore, UserStoreError,
};

pub fn email(raw: &str) -> Email {
    Email::parse(&Secret::new(raw.to_string())).unwrap()
}

#[derive(Clone)]
pub struct FixedClock(Arc<Mutex<DateTime<Utc>>>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        )))
    }
}

impl FixedClock {
    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Stores "plain:<password>" so tests can build digests by hand.
#[derive(Clone, Copy)]
pub struct PlainHasher;

#[async_trait::async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        Ok(PasswordDigest::new(format!(
            "plain:{}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError> {
        Ok(&self.hash(password).await? == digest)
    }
}

#[derive(Clone, Default)]
pub struct MemoryUserStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl MemoryUserStore {
    pub async fn insert(&self, raw_email: &str, password: &str, active: bool, now: DateTime<Utc>) {
        let account = Account::new(
            email(raw_email),
            PasswordDigest::new(format!("plain:{password}")),
            raw_email,
            active,
            now,
        );
        self.add_account(account).await.unwrap();
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn add_account(&self, account: Account) -> Result<(), UserStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(UserStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.email().clone(), account);
        Ok(())
    }

    async fn get_account(&self, email: &Email) -> Result<Account, UserStoreError> {
        self.accounts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(UserStoreError::AccountNotFound)
    }

    async fn touch_last_login(
        &self,
        email: &Email,
        at: DateTime<Utc>,
    ) -> Result<(), UserStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(UserStoreError::AccountNotFound)?;
        account.record_login(at);
        Ok(())
    }

    async fn set_active(&self, email: &Email, active: bool) -> Result<(), UserStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(UserStoreError::AccountNotFound)?;
        account.set_active(active);
        Ok(())
    }
}

pub struct FailingUserStore;

#[async_trait::async_trait]
impl UserStore for FailingUserStore {
    async fn add_account(&self, _account: Account) -> Result<(), UserStoreError> {
        Err(UserStoreError::UnexpectedError("unavailable".to_string()))
    }

    async fn get_account(&self, _email: &Email) -> Result<Account, UserStoreError> {
        Err(UserStoreError::UnexpectedError("unavailable".to_string()))
    }

    async fn touch_last_login(
        &self,
        _email: &Email,
        _at: DateTime<Utc>,
    ) -> Result<(), UserStoreError> {
        Err(UserStoreError::UnexpectedError("unavailable".to_string()))
    }

    async fn set_active(&self, _email: &Email, _active: bool) -> Result<(), UserStoreError> {
        Err(UserStoreError::UnexpectedError("unavailable".to_string()))
    }
}

#[derive(Clone)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
    policy: SessionPolicy,
    clock: FixedClock,
}

impl MemorySessionStore {
    pub fn new(clock: FixedClock) -> Self {
        Self {
            sessions: Arc::default(),
            policy: SessionPolicy::default(),
            clock,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(
        &self,
        account_email: Email,
        persistent: bool,
    ) -> Result<Session, SessionStoreError> {
        let session = Session::new(
            SessionToken::generate(),
            account_email,
            persistent,
            self.clock.now(),
        );
        self.sessions
            .write()
            .await
            .insert(session.token().clone(), session.clone());
        Ok(session)
    }

    async fn validate_and_get(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Session>, SessionStoreError> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.get_mut(token) else {
            return Ok(None);
        };
        if session.is_expired(now, &self.policy) {
            sessions.remove(token);
            return Ok(None);
        }
        session.touch(now);
        Ok(Some(session.clone()))
    }

    async fn revoke(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.write().await.remove(token))
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, &self.policy));
        Ok(before - sessions.len())
    }

    fn policy(&self) -> SessionPolicy {
        self.policy
    }
}

pub struct FailingSessionStore;

#[async_trait::async_trait]
impl SessionStore for FailingSessionStore {
    async fn create(
        &self,
        _account_email: Email,
        _persistent: bool,
    ) -> Result<Session, SessionStoreError> {
        Err(SessionStoreError::UnexpectedError("unavailable".to_string()))
    }

    async fn validate_and_get(
        &self,
        _token: &SessionToken,
    ) -> Result<Option<Session>, SessionStoreError> {
        Err(SessionStoreError::UnexpectedError("unavailable".to_string()))
    }

    async fn revoke(&self, _token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        Err(SessionStoreError::UnexpectedError("unavailable".to_string()))
    }

    async fn get(&self, _token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        Err(SessionStoreError::UnexpectedError("unavailable".to_string()))
    }

    async fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        Err(SessionStoreError::UnexpectedError("unavailable".to_string()))
    }

    fn policy(&self) -> SessionPolicy {
        SessionPolicy::default()
    }
}

#[derive(Clone, Default)]
pub struct RecordingLog {
    events: Arc<RwLock<Vec<SecurityEvent>>>,
}

impl RecordingLog {
    pub async fn events(&self) -> Vec<SecurityEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait::async_trait]
impl SecurityLog for RecordingLog {
    async fn record(&self, event: SecurityEvent) {
        self.events.write().await.push(event);
    }
}
