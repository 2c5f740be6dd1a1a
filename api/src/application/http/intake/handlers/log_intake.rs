use crate::application::http::intake::validators::LogIntakeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::intake::{entities::IntakeEntry, ports::IntakeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogIntakeResponse {
    pub data: IntakeEntry,
}

#[utoipa::path(
    post,
    path = "",
    tag = "intake",
    summary = "Log intake",
    description = "Records something the user ate. Macros are per serving and are multiplied by `servings` in the daily summary.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 201, body = LogIntakeResponse),
        (status = 422, description = "Invalid entry")
    ),
    request_body = LogIntakeValidator
)]
pub async fn log_intake(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LogIntakeValidator>,
) -> Result<Response<LogIntakeResponse>, ApiError> {
    let entry = state
        .service
        .log_intake(user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(LogIntakeResponse { data: entry }))
}
