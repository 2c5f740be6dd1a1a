use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::{FoodDetails, FoodSearchResult},
        value_objects::{FoodLookup, SearchFoodsInput},
    },
};

/// Third-party nutrition database.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionClient: Send + Sync {
    fn search_foods(
        &self,
        query: String,
        page_size: u32,
    ) -> impl Future<Output = Result<Vec<FoodSearchResult>, CoreError>> + Send;

    /// Fails with [`CoreError::NotFound`] for an unknown id.
    fn get_food(&self, fdc_id: u64) -> impl Future<Output = Result<FoodDetails, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> impl Future<Output = Result<Vec<FoodSearchResult>, CoreError>> + Send;

    fn lookup_food(
        &self,
        user_id: Uuid,
        fdc_id: u64,
    ) -> impl Future<Output = Result<FoodLookup, CoreError>> + Send;
}
