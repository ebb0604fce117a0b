//! Busy/error bookkeeping around asynchronous façade calls.
//!
//! A UI layer wraps each call in [`OperationTracker::run`] and polls
//! [`is_busy`](OperationTracker::is_busy) and
//! [`last_error`](OperationTracker::last_error) synchronously. Failures are
//! recorded and logged, then swallowed: `run` returns `None` instead.

use std::fmt::Display;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::error;

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

#[derive(Debug, Default)]
pub struct OperationTracker {
    in_flight: AtomicUsize,
    last_error: Mutex<Option<String>>,
}

impl OperationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one wrapped call has not finished.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Message of the most recent failure, cleared when a new call starts.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().ok().and_then(|e| e.clone())
    }

    pub fn clear_error(&self) {
        self.set_error(None);
    }

    /// Await `operation`, returning its value on success and `None` on failure.
    pub async fn run<T, E, F>(&self, operation: F) -> Option<T>
    where
        E: Display,
        F: Future<Output = Result<T, E>>,
    {
        self.clear_error();
        let _guard = InFlight::enter(&self.in_flight);

        match operation.await {
            Ok(value) => Some(value),
            Err(e) => {
                let message = e.to_string();
                error!(error = %message, "operation failed");
                self.set_error(Some(message));
                None
            }
        }
    }

    fn set_error(&self, value: Option<String>) {
        if let Ok(mut slot) = self.last_error.lock() {
            *slot = value;
        }
    }
}

/// Holds the in-flight count raised until dropped, including on cancellation.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
