use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::profile::{ProfileDocument, ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProfileResponse {
    pub data: ProfileDocument,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/profile",
    tag = "profile",
    summary = "Get profile document",
    description = "Returns the stored profile document of a user, or the newer write still waiting in the sync queue.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetProfileResponse),
        (status = 404, description = "User has no profile"),
        (status = 503, description = "Profile store unreachable")
    ),
)]
pub async fn get_profile(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetProfileResponse>, ApiError> {
    let document = state
        .service
        .get_profile_document(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("no profile for user {user_id}")))?;

    Ok(Response::OK(GetProfileResponse { data: document }))
}
