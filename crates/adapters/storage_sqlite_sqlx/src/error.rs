//! Storage adapter error types.

use campuscoffee_domain::error::{CampusCoffeeError, DuplicateError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CampusCoffeeError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map a write failure, turning a unique-constraint violation on the given
/// field into the system-wide duplicate error and passing anything else
/// through as a storage error.
pub(crate) fn map_write_err(
    entity: &'static str,
    field: &'static str,
    value: &str,
    err: sqlx::Error,
) -> CampusCoffeeError {
    if err
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
    {
        DuplicateError {
            entity,
            field,
            value: value.to_string(),
        }
        .into()
    } else {
        StorageError::from(err).into()
    }
}
