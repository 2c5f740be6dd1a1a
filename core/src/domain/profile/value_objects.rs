use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::profile::entities::ProfileDocument;

/// The three independent inputs a restriction profile is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct ProfileSources {
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub lifestyles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SaveProfileOutcome {
    Saved {
        document: ProfileDocument,
    },
    /// The store was unreachable; the write waits in the pending sync queue.
    Queued {
        write_id: Uuid,
        document: ProfileDocument,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct FlushReport {
    pub flushed: usize,
    pub discarded: usize,
    pub remaining: usize,
}
