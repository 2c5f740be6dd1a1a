use super::handlers::classify_item::{__path_classify_item, classify_item};
use super::handlers::evaluate_items::{__path_evaluate_items, evaluate_items};
use super::handlers::evaluate_records::{__path_evaluate_records, evaluate_records};
use super::handlers::partition_items::{__path_partition_items, partition_items};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(classify_item, evaluate_items, partition_items, evaluate_records))]
pub struct SafetyApiDoc;

pub fn safety_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/safety/classify", state.args.server.root_path),
            post(classify_item),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/safety/evaluate",
                state.args.server.root_path
            ),
            post(evaluate_items),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/safety/partition",
                state.args.server.root_path
            ),
            post(partition_items),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/safety/records",
                state.args.server.root_path
            ),
            post(evaluate_records),
        )
}
