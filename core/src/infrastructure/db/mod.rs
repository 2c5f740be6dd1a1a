use sea_orm::DbErr;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub mod postgres;

/// Connection failures become [`CoreError::StoreUnavailable`] so the domain
/// can queue writes; everything else is an internal error.
pub fn map_db_error(action: &str, e: DbErr) -> CoreError {
    error!("Failed to {}: {}", action, e);

    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            CoreError::StoreUnavailable(format!("database unreachable while trying to {action}"))
        }
        _ => CoreError::InternalServerError,
    }
}
