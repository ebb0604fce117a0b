//! Remote backend abstraction.
//!
//! The façade talks to the backend through the [`RemoteClient`] trait so the
//! HTTP client can be swapped for the in-memory backend in tests.
//!
//! # Architecture
//!
//! - `error`: the backend error shape
//! - `postgrest`: reqwest-backed PostgREST client
//! - `memory`: in-process backend with PostgREST semantics

mod error;
pub mod memory;
pub mod postgrest;

#[cfg(test)]
mod memory_test;
#[cfg(test)]
mod postgrest_test;

use std::fmt;
use std::future::Future;

use serde_json::Value;

pub use error::{BackendError, NO_ROWS_CODE};
pub use memory::MemoryBackend;
pub use postgrest::PostgrestClient;

/// Result type for remote calls.
pub type RemoteResult<T> = Result<T, BackendError>;

/// The four operations the façade issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Select => write!(f, "select"),
            Operation::Insert => write!(f, "insert"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// What the caller wants back from the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Returning {
    /// No rows; the call only reports success or failure.
    #[default]
    Nothing,
    /// Every selected or affected row.
    Rows,
    /// Exactly one row; any other count is a `PGRST116` failure.
    Single,
}

/// Equality filter on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

/// Ordering on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// One round trip against one table.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub operation: Operation,
    pub table: String,
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub payload: Option<Value>,
    pub returning: Returning,
}

impl RemoteRequest {
    fn new(operation: Operation, table: &str) -> Self {
        Self {
            operation,
            table: table.to_string(),
            filter: None,
            order: None,
            payload: None,
            returning: Returning::Nothing,
        }
    }

    /// `select *` from `table`, returning all matching rows.
    pub fn select(table: &str) -> Self {
        Self {
            returning: Returning::Rows,
            ..Self::new(Operation::Select, table)
        }
    }

    /// Insert `payload` into `table`, returning the stored rows.
    pub fn insert(table: &str, payload: Value) -> Self {
        Self {
            payload: Some(payload),
            returning: Returning::Rows,
            ..Self::new(Operation::Insert, table)
        }
    }

    /// Update rows of `table` with the columns present in `payload`.
    pub fn update(table: &str, payload: Value) -> Self {
        Self {
            payload: Some(payload),
            returning: Returning::Rows,
            ..Self::new(Operation::Update, table)
        }
    }

    /// Delete rows of `table`.
    pub fn delete(table: &str) -> Self {
        Self::new(Operation::Delete, table)
    }

    /// Restrict the call to rows where `column = value`.
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filter = Some(Filter {
            column: column.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Order the result by `column`.
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }

    /// Expect exactly one row back.
    pub fn single(mut self) -> Self {
        self.returning = Returning::Single;
        self
    }
}

/// Capability to execute one request against the backend.
///
/// Implementations return the selected or affected rows as JSON objects
/// (empty when `returning` is [`Returning::Nothing`]) or the backend's error.
pub trait RemoteClient: Send + Sync {
    fn execute(
        &self,
        request: RemoteRequest,
    ) -> impl Future<Output = RemoteResult<Vec<Value>>> + Send;
}

impl<C: RemoteClient> RemoteClient for &C {
    fn execute(
        &self,
        request: RemoteRequest,
    ) -> impl Future<Output = RemoteResult<Vec<Value>>> + Send {
        (**self).execute(request)
    }
}

impl<C: RemoteClient> RemoteClient for std::sync::Arc<C> {
    fn execute(
        &self,
        request: RemoteRequest,
    ) -> impl Future<Output = RemoteResult<Vec<Value>>> + Send {
        (**self).execute(request)
    }
}
