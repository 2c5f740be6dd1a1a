use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::profile::{ProfileService, RestrictionProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRestrictionsResponse {
    pub data: RestrictionProfile,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/restrictions",
    tag = "profile",
    summary = "Get restriction profile",
    description = "Derives the effective restriction profile of a user from their profile document. A user without a document gets an unrestricted profile.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = GetRestrictionsResponse),
        (status = 503, description = "Profile store unreachable")
    ),
)]
pub async fn get_restrictions(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetRestrictionsResponse>, ApiError> {
    let profile = state
        .service
        .get_restriction_profile(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRestrictionsResponse { data: profile }))
}
