use super::handlers::get_catalog::{__path_get_catalog, get_catalog};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_catalog))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/catalog", state.args.server.root_path),
        get(get_catalog),
    )
}
