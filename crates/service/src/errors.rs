use sea_orm::DbErr;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        common::metrics::record_not_found(entity);
        Self::NotFound(format!("{} not found", entity))
    }
}

/// Log a data-access failure at the repository boundary and turn it into a value.
pub(crate) fn store_failure(operation: &'static str, err: DbErr) -> ServiceError {
    error!(operation, err = %err, "store access failed");
    common::metrics::record_store_failure(operation);
    ServiceError::Db(format!("{operation}: {err}"))
}
