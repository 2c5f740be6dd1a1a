use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    intake::ports::IntakeRepository,
    nutrition::{
        entities::FoodSearchResult,
        ports::{NutritionClient, NutritionService},
        value_objects::{FoodLookup, SearchFoodsInput},
    },
    profile::ports::{ProfileRepository, ProfileService},
    safety::{classifier::classify, entities::EvaluatedItem},
    sync::ports::PendingSyncQueue,
};

impl<P, I, Q, N> NutritionService for Service<P, I, Q, N>
where
    P: ProfileRepository,
    I: IntakeRepository,
    Q: PendingSyncQueue,
    N: NutritionClient,
{
    #[instrument(skip(self))]
    async fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> Result<Vec<FoodSearchResult>, CoreError> {
        input.validate()?;

        self.nutrition_client
            .search_foods(input.query.trim().to_string(), input.page_size)
            .await
    }

    #[instrument(skip(self), fields(user_id = %user_id, fdc_id = fdc_id))]
    async fn lookup_food(&self, user_id: Uuid, fdc_id: u64) -> Result<FoodLookup, CoreError> {
        let details = self.nutrition_client.get_food(fdc_id).await?;
        let profile = self.get_restriction_profile(user_id).await?;

        let item = details.to_food_item();
        let verdict = classify(&item, &profile);

        Ok(FoodLookup {
            details,
            evaluation: EvaluatedItem { item, verdict },
        })
    }
}
