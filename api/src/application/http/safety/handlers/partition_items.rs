use crate::application::http::safety::validators::EvaluateItemsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use safeplate_core::domain::safety::{Partition, ports::SafetyService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PartitionItemsResponse {
    pub data: Partition,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/safety/partition",
    tag = "safety",
    summary = "Partition items",
    description = "Splits items into safe, caution, unsafe and unknown groups for the user's restriction profile, keeping input order within each group.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = PartitionItemsResponse),
        (status = 503, description = "Profile store unreachable")
    ),
    request_body = EvaluateItemsValidator
)]
pub async fn partition_items(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EvaluateItemsValidator>,
) -> Result<Response<PartitionItemsResponse>, ApiError> {
    let partition = state
        .service
        .partition_items(user_id, payload.items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PartitionItemsResponse { data: partition }))
}
