use serde_json::Value;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_item::{
        entities::{FoodItem, ItemSource},
        normalize::normalize_records,
    },
    intake::ports::IntakeRepository,
    nutrition::ports::NutritionClient,
    profile::ports::{ProfileRepository, ProfileService},
    safety::{
        aggregator::{partition, sort_by_severity, summarize},
        entities::{Partition, SafetyReport},
        ports::SafetyService,
    },
    sync::ports::PendingSyncQueue,
};

impl<P, I, Q, N> SafetyService for Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    #[instrument(skip(self, items), fields(user_id = %user_id, items = items.len()))]
    async fn evaluate_items(
        &self,
        user_id: Uuid,
        items: Vec<FoodItem>,
    ) -> Result<SafetyReport, CoreError> {
        let profile = self.get_restriction_profile(user_id).await?;

        let items = sort_by_severity(items, &profile);
        let summary = summarize(&items);
        debug!(?summary, "items evaluated");

        Ok(SafetyReport {
            profile,
            items,
            summary,
            rejected: Vec::new(),
        })
    }

    #[instrument(skip(self, items), fields(user_id = %user_id, items = items.len()))]
    async fn partition_items(
        &self,
        user_id: Uuid,
        items: Vec<FoodItem>,
    ) -> Result<Partition, CoreError> {
        let profile = self.get_restriction_profile(user_id).await?;

        Ok(partition(items, &profile))
    }

    #[instrument(skip(self, records), fields(user_id = %user_id, records = records.len()))]
    async fn evaluate_records(
        &self,
        user_id: Uuid,
        source: ItemSource,
        records: Vec<Value>,
    ) -> Result<SafetyReport, CoreError> {
        let batch = normalize_records(source, &records);
        if !batch.rejected.is_empty() {
            debug!(rejected = batch.rejected.len(), "some catalog records could not be normalized");
        }

        let items = batch.items.into_iter().map(|(_, item)| item).collect();
        let mut report = self.evaluate_items(user_id, items).await?;
        report.rejected = batch.rejected;

        Ok(report)
    }
}
