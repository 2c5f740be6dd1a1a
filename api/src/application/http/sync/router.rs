use super::handlers::flush_pending_writes::{__path_flush_pending_writes, flush_pending_writes};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(flush_pending_writes))]
pub struct SyncApiDoc;

pub fn sync_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/sync/flush", state.args.server.root_path),
        post(flush_pending_writes),
    )
}
