use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::nutrition::{ports::NutritionService, value_objects::FoodLookup};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LookupFoodResponse {
    pub data: FoodLookup,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/nutrition/foods/{fdc_id}",
    tag = "nutrition",
    summary = "Look up food",
    description = "Fetches a food from USDA FoodData Central and classifies it for the user. USDA data carries no allergen declarations, so any banned allergen makes the verdict `unknown`.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("fdc_id" = u64, Path, description = "FoodData Central ID"),
    ),
    responses(
        (status = 200, body = LookupFoodResponse),
        (status = 404, description = "Unknown FoodData Central ID"),
        (status = 502, description = "Nutrition database failed"),
        (status = 503, description = "Nutrition database not configured")
    ),
)]
pub async fn lookup_food(
    Path((user_id, fdc_id)): Path<(Uuid, u64)>,
    State(state): State<AppState>,
) -> Result<Response<LookupFoodResponse>, ApiError> {
    let lookup = state
        .service
        .lookup_food(user_id, fdc_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LookupFoodResponse { data: lookup }))
}
