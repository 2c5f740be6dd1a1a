use super::handlers::get_profile::{__path_get_profile, get_profile};
use super::handlers::get_restrictions::{__path_get_restrictions, get_restrictions};
use super::handlers::preview_profile::{__path_preview_profile, preview_profile};
use super::handlers::save_profile::{__path_save_profile, save_profile};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(preview_profile, get_profile, save_profile, get_restrictions))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles/preview", state.args.server.root_path),
            post(preview_profile),
        )
        .route(
            &format!("{}/users/{{user_id}}/profile", state.args.server.root_path),
            get(get_profile).put(save_profile),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/restrictions",
                state.args.server.root_path
            ),
            get(get_restrictions),
        )
}
