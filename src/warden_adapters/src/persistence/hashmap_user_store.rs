use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use warden_core::{Account, Email, UserStore, UserStoreError};

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "Adding account to HashMap store", skip_all)]
    async fn add_account(&self, account: Account) -> Result<(), UserStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(UserStoreError::AccountAlreadyExists);
        }
        accounts.insert(account.email().clone(), account);
        Ok(())
    }

    async fn get_account(&self, email: &Email) -> Result<Account, UserStoreError> {
        let accounts = self.accounts.read().await;
        accounts
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

    #[tracing::instrument(name = "Setting account active flag", skip(self, email))]
    async fn set_active(&self, email: &Email, active: bool) -> Result<(), UserStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(UserStoreError::AccountNotFound)?;

        account.set_active(active);
        Ok(())
    }
}
