use crate::application::http::safety::validators::EvaluateItemsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::safety::{SafetyReport, ports::SafetyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EvaluateItemsResponse {
    pub data: SafetyReport,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/safety/evaluate",
    tag = "safety",
    summary = "Evaluate items",
    description = "Classifies items against the user's restriction profile. Items come back most severe first, with a count per safety level.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = EvaluateItemsResponse),
        (status = 503, description = "Profile store unreachable")
    ),
    request_body = EvaluateItemsValidator
)]
pub async fn evaluate_items(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EvaluateItemsValidator>,
) -> Result<Response<EvaluateItemsResponse>, ApiError> {
    let report = state
        .service
        .evaluate_items(user_id, payload.items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EvaluateItemsResponse { data: report }))
}
