//! Data-access error types.
//!
//! Backend failures pass through unchanged so callers can inspect the
//! PostgREST code; decoding and encoding failures name the entity involved.

use miette::Diagnostic;
use thiserror::Error;

use crate::remote::BackendError;

/// Data-access errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Backend(#[from] BackendError),

    #[error("Invalid {entity} row: {message}")]
    #[diagnostic(
        code(studiodesk::db::invalid_row),
        help("the stored row does not match the expected shape")
    )]
    InvalidRow {
        entity: &'static str,
        message: String,
    },

    #[error("Failed to encode {entity}: {message}")]
    #[diagnostic(code(studiodesk::db::encode))]
    Encode {
        entity: &'static str,
        message: String,
    },
}

impl DbError {
    /// True when the backend reported that no single row matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::Backend(err) if err.is_not_found())
    }
}

/// Result type for data-access operations.
pub type DbResult<T> = Result<T, DbError>;
