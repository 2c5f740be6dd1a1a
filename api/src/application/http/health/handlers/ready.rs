use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use safeplate_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadyResponse {
    pub data: ReadinessStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Ready when the profile store answers. Reports how many profile writes are still queued.",
    responses(
        (status = 200, body = ReadyResponse),
        (status = 503, description = "Profile store unreachable")
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadyResponse>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    if !status.ready {
        return Err(ApiError::ServiceUnavailable(format!(
            "profile store unreachable, {} profile writes pending",
            status.pending_writes
        )));
    }

    Ok(Response::OK(ReadyResponse { data: status }))
}
