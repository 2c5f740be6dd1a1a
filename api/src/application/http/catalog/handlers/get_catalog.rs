use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use safeplate_core::domain::catalog::value_objects::CatalogListing;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCatalogResponse {
    pub data: CatalogListing,
}

#[utoipa::path(
    get,
    path = "",
    tag = "catalog",
    summary = "Get catalog",
    description = "Lists the supported allergens, medical conditions and lifestyles, with the category tags each one shields against and the macro caps lifestyles impose.",
    responses(
        (status = 200, body = GetCatalogResponse)
    ),
)]
pub async fn get_catalog() -> Result<Response<GetCatalogResponse>, ApiError> {
    Ok(Response::OK(GetCatalogResponse {
        data: CatalogListing::current(),
    }))
}
