use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use safeplate_core::domain::profile::{FlushReport, ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FlushPendingWritesResponse {
    pub data: FlushReport,
}

#[utoipa::path(
    post,
    path = "/flush",
    tag = "sync",
    summary = "Flush pending profile writes",
    description = "Replays queued profile writes oldest first. Stops at the first write the store still refuses and keeps it and everything after it queued.",
    responses(
        (status = 200, body = FlushPendingWritesResponse)
    ),
)]
pub async fn flush_pending_writes(
    State(state): State<AppState>,
) -> Result<Response<FlushPendingWritesResponse>, ApiError> {
    let report = state
        .service
        .flush_pending_writes()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FlushPendingWritesResponse { data: report }))
}
