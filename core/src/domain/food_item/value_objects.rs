use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_item::entities::FoodItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RejectedRecord {
    pub index: usize,
    pub reason: String,
}

/// Result of normalizing a batch of catalog records. Accepted items keep the
/// index of the record they came from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedBatch {
    pub items: Vec<(usize, FoodItem)>,
    pub rejected: Vec<RejectedRecord>,
}
