use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, sync::entities::PendingWrite};

/// FIFO queue of profile writes that failed because the store was unreachable.
#[cfg_attr(test, mockall::automock)]
pub trait PendingSyncQueue: Send + Sync {
    fn enqueue(&self, write: PendingWrite) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Most recently queued write for the user, if any.
    fn latest_for_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<PendingWrite>, CoreError>> + Send;

    /// Oldest queued write, left in the queue.
    fn front(&self) -> impl Future<Output = Result<Option<PendingWrite>, CoreError>> + Send;

    /// Drops a write once it has been replayed or superseded. Unknown ids are
    /// ignored.
    fn remove(&self, write_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Counts a failed replay against a queued write.
    fn record_attempt(&self, write_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn pending_count(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
