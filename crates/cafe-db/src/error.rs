//! Database error types for cafe-db.

use cafe_core::errors::CoreError;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Lookup by id found nothing.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A referential or derived-data invariant would be broken.
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// Caller-supplied data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid state encountered (e.g., disallowed status transition).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::InvalidTransition { .. } => Self::InvalidState(err.to_string()),
            other @ CoreError::NotFound { .. } => Self::Other(other.into()),
            CoreError::Other(e) => Self::Other(e),
        }
    }
}

impl DatabaseError {
    /// Reclassify SQLite constraint failures as integrity violations.
    ///
    /// Used on write paths where a `FOREIGN KEY`, `UNIQUE` or `CHECK` failure
    /// means the caller asked for something the schema forbids.
    #[must_use]
    pub fn from_write(err: libsql::Error) -> Self {
        let msg = err.to_string();
        if msg.contains("constraint failed") {
            Self::Integrity(msg)
        } else {
            Self::LibSql(err)
        }
    }

    #[must_use]
    pub const fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }
}
