use std::future::Future;

use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_item::entities::{FoodItem, ItemSource},
    safety::entities::{Partition, SafetyReport},
};

/// Runs the classifier against the stored profile of a user.
#[cfg_attr(test, mockall::automock)]
pub trait SafetyService: Send + Sync {
    fn evaluate_items(
        &self,
        user_id: Uuid,
        items: Vec<FoodItem>,
    ) -> impl Future<Output = Result<SafetyReport, CoreError>> + Send;

    fn partition_items(
        &self,
        user_id: Uuid,
        items: Vec<FoodItem>,
    ) -> impl Future<Output = Result<Partition, CoreError>> + Send;

    /// Normalizes raw catalog records before evaluating them; records that
    /// cannot be normalized are reported back instead of failing the call.
    fn evaluate_records(
        &self,
        user_id: Uuid,
        source: ItemSource,
        records: Vec<Value>,
    ) -> impl Future<Output = Result<SafetyReport, CoreError>> + Send;
}
