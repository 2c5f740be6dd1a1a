use crate::application::http::safety::validators::ClassifyItemValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use safeplate_core::domain::safety::{Verdict, classify};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClassifyItemResponse {
    pub data: Verdict,
}

#[utoipa::path(
    post,
    path = "/safety/classify",
    tag = "safety",
    summary = "Classify item",
    description = "Classifies one food item against an explicit restriction profile. Nothing is read from or written to the profile store.",
    responses(
        (status = 200, body = ClassifyItemResponse)
    ),
    request_body = ClassifyItemValidator
)]
pub async fn classify_item(
    ValidateJson(payload): ValidateJson<ClassifyItemValidator>,
) -> Result<Response<ClassifyItemResponse>, ApiError> {
    let verdict = classify(&payload.item, &payload.profile);

    Ok(Response::OK(ClassifyItemResponse { data: verdict }))
}
