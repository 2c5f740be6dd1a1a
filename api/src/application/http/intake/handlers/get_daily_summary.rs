use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use safeplate_core::domain::intake::{entities::DailySummary, ports::IntakeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDailySummaryResponse {
    pub data: DailySummary,
}

#[utoipa::path(
    get,
    path = "/{date}",
    tag = "intake",
    summary = "Get daily summary",
    description = "Returns the entries logged on one day together with per-metric totals.",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("date" = String, Path, description = "Day, formatted as YYYY-MM-DD"),
    ),
    responses(
        (status = 200, body = GetDailySummaryResponse)
    ),
)]
pub async fn get_daily_summary(
    Path((user_id, date)): Path<(Uuid, NaiveDate)>,
    State(state): State<AppState>,
) -> Result<Response<GetDailySummaryResponse>, ApiError> {
    let summary = state
        .service
        .daily_summary(user_id, date)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDailySummaryResponse { data: summary }))
}
