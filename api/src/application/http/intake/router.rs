use super::handlers::delete_intake::{__path_delete_intake, delete_intake};
use super::handlers::get_daily_summary::{__path_get_daily_summary, get_daily_summary};
use super::handlers::log_intake::{__path_log_intake, log_intake};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(log_intake, get_daily_summary, delete_intake))]
pub struct IntakeApiDoc;

pub fn intake_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/{{user_id}}/intake", state.args.server.root_path),
            post(log_intake),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/intake/{{date}}",
                state.args.server.root_path
            ),
            get(get_daily_summary),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/intake/entries/{{entry_id}}",
                state.args.server.root_path
            ),
            delete(delete_intake),
        )
}
