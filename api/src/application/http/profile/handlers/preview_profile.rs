use crate::application::http::profile::validators::ProfileSourcesValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use safeplate_core::domain::profile::{RestrictionProfile, build_profile_from_sources};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PreviewProfileResponse {
    pub data: RestrictionProfile,
}

#[utoipa::path(
    post,
    path = "/profiles/preview",
    tag = "profile",
    summary = "Preview restriction profile",
    description = "Builds the restriction profile for the given allergens, conditions and lifestyles without storing anything. Unknown condition or lifestyle ids are rejected.",
    responses(
        (status = 200, body = PreviewProfileResponse),
        (status = 400, description = "Unknown catalog id")
    ),
    request_body = ProfileSourcesValidator
)]
pub async fn preview_profile(
    ValidateJson(payload): ValidateJson<ProfileSourcesValidator>,
) -> Result<Response<PreviewProfileResponse>, ApiError> {
    let profile = build_profile_from_sources(&payload.into()).map_err(ApiError::from)?;

    Ok(Response::OK(PreviewProfileResponse { data: profile }))
}
