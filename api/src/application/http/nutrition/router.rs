use super::handlers::lookup_food::{__path_lookup_food, lookup_food};
use super::handlers::search_foods::{__path_search_foods, search_foods};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_foods, lookup_food))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition/foods", state.args.server.root_path),
            get(search_foods),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/nutrition/foods/{{fdc_id}}",
                state.args.server.root_path
            ),
            get(lookup_food),
        )
}
