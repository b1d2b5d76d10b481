use std::sync::Arc;

use tokio::sync::RwLock;
use warden_core::{SecurityEvent, SecurityLog};

/// Keeps every event in memory, in arrival order. Entries can be read but
/// never changed or removed.
#[derive(Debug, Default, Clone)]
pub struct InMemorySecurityLog {
    events: Arc<RwLock<Vec<SecurityEvent>>>,
}

impl InMemorySecurityLog {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn entries(&self) -> Vec<SecurityEvent> {
        self.events.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl SecurityLog for InMemorySecurityLog {
    async fn record(&self, event: SecurityEvent) {
        self.events.write().await.push(event);
    }
}
