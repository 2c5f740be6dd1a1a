use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Unknown {catalog} id: {id}")]
    UnknownCatalogId { catalog: String, id: String },

    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Service not configured: {0}")]
    NotConfigured(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn unknown_catalog_id(catalog: &str, id: &str) -> Self {
        CoreError::UnknownCatalogId {
            catalog: catalog.to_string(),
            id: id.to_string(),
        }
    }
}
