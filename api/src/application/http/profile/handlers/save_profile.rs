use crate::application::http::profile::validators::ProfileSourcesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::profile::{ProfileService, SaveProfileOutcome};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveProfileResponse {
    pub data: SaveProfileOutcome,
}

#[utoipa::path(
    put,
    path = "/users/{user_id}/profile",
    tag = "profile",
    summary = "Save profile document",
    description = "Validates and stores the profile document of a user. When the profile store is unreachable the write is queued and the response is 202 with status `queued`.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = SaveProfileResponse),
        (status = 202, body = SaveProfileResponse, description = "Write queued for later sync"),
        (status = 400, description = "Unknown catalog id")
    ),
    request_body = ProfileSourcesValidator
)]
pub async fn save_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProfileSourcesValidator>,
) -> Result<Response<SaveProfileResponse>, ApiError> {
    let outcome = state
        .service
        .save_profile_document(user_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    let queued = matches!(outcome, SaveProfileOutcome::Queued { .. });
    let body = SaveProfileResponse { data: outcome };

    if queued {
        Ok(Response::Accepted(body))
    } else {
        Ok(Response::OK(body))
    }
}
