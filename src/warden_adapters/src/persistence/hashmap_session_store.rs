use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};

use warden_core::{
    Clock, Email, Session, SessionPolicy, SessionStore, SessionStoreError, SessionToken,
};

/// In-memory session table.
///
/// Every operation on a token runs under that token's shard lock, so the
/// check-then-refresh-or-evict step of validation is atomic with respect to
/// other callers holding the same token.
#[derive(Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<DashMap<SessionToken, Session>>,
    policy: SessionPolicy,
    clock: Arc<dyn Clock>,
}

impl HashMapSessionStore {
    pub fn new(policy: SessionPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            policy,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    #[tracing::instrument(name = "Creating session", skip(self, account_email))]
    async fn create(
        &self,
        account_email: Email,
        persistent: bool,
    ) -> Result<Session, SessionStoreError> {
        let now = self.clock.now();
        loop {
            match self.sessions.entry(SessionToken::generate()) {
                Entry::Occupied(_) => {
                    tracing::warn!("Generated session token collided with a live session");
                }
                Entry::Vacant(entry) => {
                    let session = Session::new(entry.key().clone(), account_email, persistent, now);
                    entry.insert(session.clone());
                    return Ok(session);
                }
            }
        }
    }

    async fn validate_and_get(
        &self,
        token: &SessionToken,
    ) -> Result<Option<Session>, SessionStoreError> {
        let now = self.clock.now();
        match self.sessions.entry(token.clone()) {
            Entry::Vacant(_) => Ok(None),
            Entry::Occupied(mut entry) => {
                if entry.get().is_expired(now, &self.policy) {
                    entry.remove();
                    tracing::debug!(?token, "Evicted expired session");
                    return Ok(None);
                }
                let session = entry.get_mut();
                session.touch(now);
                Ok(Some(session.clone()))
            }
        }
    }

    async fn revoke(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.remove(token).map(|(_, session)| session))
    }

    async fn get(&self, token: &SessionToken) -> Result<Option<Session>, SessionStoreError> {
        Ok(self
            .sessions
            .get(token)
            .map(|session| session.value().clone()))
    }

    #[tracing::instrument(name = "Purging expired sessions", skip(self))]
    async fn purge_expired(&self) -> Result<usize, SessionStoreError> {
        let now = self.clock.now();
        let mut removed = 0;
        self.sessions.retain(|_, session| {
            let expired = session.is_expired(now, &self.policy);
            if expired {
                removed += 1;
            }
            !expired
        });
        Ok(removed)
    }

    fn policy(&self) -> SessionPolicy {
        self.policy
    }
}
