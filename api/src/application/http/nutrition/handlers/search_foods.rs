use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use safeplate_core::domain::nutrition::{
    entities::FoodSearchResult,
    ports::NutritionService,
    value_objects::{DEFAULT_PAGE_SIZE, SearchFoodsInput},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchFoodsQuery {
    pub query: String,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchFoodsResponse {
    pub data: Vec<FoodSearchResult>,
}

#[utoipa::path(
    get,
    path = "/nutrition/foods",
    tag = "nutrition",
    summary = "Search foods",
    description = "Searches the USDA FoodData Central database. `page_size` defaults to 25 and may not exceed 200.",
    params(SearchFoodsQuery),
    responses(
        (status = 200, body = SearchFoodsResponse),
        (status = 400, description = "Empty query or page size out of range"),
        (status = 502, description = "Nutrition database failed"),
        (status = 503, description = "Nutrition database not configured")
    ),
)]
pub async fn search_foods(
    Query(query): Query<SearchFoodsQuery>,
    State(state): State<AppState>,
) -> Result<Response<SearchFoodsResponse>, ApiError> {
    let results = state
        .service
        .search_foods(SearchFoodsInput {
            query: query.query,
            page_size: query.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchFoodsResponse { data: results }))
}
