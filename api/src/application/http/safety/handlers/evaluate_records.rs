use crate::application::http::safety::validators::EvaluateRecordsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::safety::{SafetyReport, ports::SafetyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EvaluateRecordsResponse {
    pub data: SafetyReport,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/safety/records",
    tag = "safety",
    summary = "Evaluate raw catalog records",
    description = "Normalizes raw restaurant, grocery or recipe records into food items and evaluates them. Records that cannot be normalized are listed under `rejected` with their index.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = EvaluateRecordsResponse),
        (status = 503, description = "Profile store unreachable")
    ),
    request_body = EvaluateRecordsValidator
)]
pub async fn evaluate_records(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EvaluateRecordsValidator>,
) -> Result<Response<EvaluateRecordsResponse>, ApiError> {
    let report = state
        .service
        .evaluate_records(user_id, payload.source, payload.records)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(EvaluateRecordsResponse { data: report }))
}
