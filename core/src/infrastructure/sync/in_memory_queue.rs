use std::collections::VecDeque;

use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    sync::{entities::PendingWrite, ports::PendingSyncQueue},
};

/// Process-local pending sync queue. Writes survive store outages but not a
/// restart of the service.
#[derive(Debug, Default)]
pub struct InMemoryPendingSyncQueue {
    writes: Mutex<VecDeque<PendingWrite>>,
}

impl InMemoryPendingSyncQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PendingSyncQueue for InMemoryPendingSyncQueue {
    async fn enqueue(&self, write: PendingWrite) -> Result<(), CoreError> {
        let mut writes = self.writes.lock().await;
        writes.push_back(write);
        debug!(pending = writes.len(), "write queued");
        Ok(())
    }

    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<PendingWrite>, CoreError> {
        let writes = self.writes.lock().await;
        Ok(writes
            .iter()
            .rev()
            .find(|write| write.user_id() == user_id)
            .cloned())
    }

    async fn front(&self) -> Result<Option<PendingWrite>, CoreError> {
        Ok(self.writes.lock().await.front().cloned())
    }

    async fn remove(&self, write_id: Uuid) -> Result<(), CoreError> {
        let mut writes = self.writes.lock().await;
        writes.retain(|write| write.id != write_id);
        debug!(pending = writes.len(), %write_id, "write removed");
        Ok(())
    }

    async fn record_attempt(&self, write_id: Uuid) -> Result<(), CoreError> {
        let mut writes = self.writes.lock().await;
        if let Some(write) = writes.iter_mut().find(|write| write.id == write_id) {
            write.attempts += 1;
        }
        Ok(())
    }

    async fn pending_count(&self) -> Result<usize, CoreError> {
        Ok(self.writes.lock().await.len())
    }
}
