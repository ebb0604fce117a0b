//! Backend error shape.
//!
//! Mirrors the PostgREST error body (`code`, `message`, `details`, `hint`)
//! plus the HTTP status when one was received.

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;

/// PostgREST code for "JSON object requested, multiple (or no) rows returned".
pub const NO_ROWS_CODE: &str = "PGRST116";

/// An error reported by the backend, or a transport failure reaching it.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq, Deserialize)]
#[error("{message}")]
#[diagnostic(code(studiodesk::remote::backend))]
pub struct BackendError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(skip)]
    pub status: Option<u16>,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
            status: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// The error a single-row request gets when the row count is not exactly one.
    pub fn no_rows(count: usize) -> Self {
        Self::new("JSON object requested, multiple (or no) rows returned")
            .with_code(NO_ROWS_CODE)
            .with_details(format!("The result contains {} rows", count))
            .with_status(406)
    }

    /// True when the backend reported that a single-row request matched no row.
    pub fn is_not_found(&self) -> bool {
        self.code.as_deref() == Some(NO_ROWS_CODE)
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(e: reqwest::Error) -> Self {
        let mut err = BackendError::new(e.to_string());
        err.status = e.status().map(|s| s.as_u16());
        err
    }
}
