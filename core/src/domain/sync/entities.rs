use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, profile::entities::ProfileDocument};

/// A profile write the store could not accept yet, waiting to be replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PendingWrite {
    pub id: Uuid,
    pub document: ProfileDocument,
    pub queued_at: DateTime<Utc>,
    pub attempts: u32,
}

impl PendingWrite {
    pub fn new(document: ProfileDocument) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            document,
            queued_at: now,
            attempts: 0,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.document.user_id
    }
}
