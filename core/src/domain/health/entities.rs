use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessStatus {
    pub ready: bool,
    pub profile_store_online: bool,
    /// Profile writes still waiting for the store.
    pub pending_writes: usize,
    pub checked_at: DateTime<Utc>,
}
