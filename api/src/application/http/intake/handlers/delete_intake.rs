use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::intake::ports::IntakeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteIntakeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/entries/{entry_id}",
    tag = "intake",
    summary = "Delete intake entry",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("entry_id" = Uuid, Path, description = "Intake entry ID"),
    ),
    responses(
        (status = 200, body = DeleteIntakeResponse),
        (status = 404, description = "Entry not found for this user")
    ),
)]
pub async fn delete_intake(
    Path((user_id, entry_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteIntakeResponse>, ApiError> {
    state
        .service
        .delete_intake(user_id, entry_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteIntakeResponse {
        message: "Intake entry deleted successfully".to_string(),
    }))
}
