//! In-process backend with PostgREST semantics.
//!
//! Rows are kept per table in insertion order. Inserts assign `id`,
//! `created_at` and `updated_at`; updates merge the payload's keys into every
//! matching row; single-row requests fail with `PGRST116` unless exactly one
//! row matches, and a failed single-row update changes nothing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use chrono::{SecondsFormat, Utc};
use dashmap::DashMap;
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use super::{
    BackendError, Filter, Operation, Order, RemoteClient, RemoteRequest, RemoteResult, Returning,
};

/// Hidden column holding the insertion sequence, used to break `created_at` ties.
const SEQ_COLUMN: &str = "__seq";

/// In-memory backend. Cheap to create; one per test.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tables: DashMap<String, Vec<Value>>,
    seq: AtomicU64,
    fail_next: Mutex<Option<BackendError>>,
    requests: Mutex<Vec<RemoteRequest>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next request fail with `error` instead of touching any table.
    pub fn fail_next(&self, error: BackendError) {
        if let Ok(mut slot) = self.fail_next.lock() {
            *slot = Some(error);
        }
    }

    /// Every request executed so far, in order.
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Stored rows of `table` in insertion order, as the backend holds them.
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .get(table)
            .map(|rows| rows.iter().map(strip_hidden).collect())
            .unwrap_or_default()
    }

    /// Store a row as-is (bypassing id/timestamp assignment), for seeding fixtures.
    pub fn seed(&self, table: &str, row: Value) {
        let mut row = row;
        if let Value::Object(map) = &mut row {
            map.insert(SEQ_COLUMN.to_string(), Value::from(self.next_seq()));
        }
        self.tables.entry(table.to_string()).or_default().push(row);
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, AtomicOrdering::SeqCst)
    }

    fn take_failure(&self) -> Option<BackendError> {
        self.fail_next.lock().ok().and_then(|mut slot| slot.take())
    }

    fn select(&self, request: &RemoteRequest) -> Vec<Value> {
        let mut rows: Vec<Value> = self
            .tables
            .get(&request.table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches(row, request.filter.as_ref()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &request.order {
            sort_rows(&mut rows, order);
        }
        rows
    }

    fn insert(&self, request: &RemoteRequest) -> RemoteResult<Vec<Value>> {
        let payloads = match request.payload.clone() {
            Some(Value::Array(items)) => items,
            Some(item @ Value::Object(_)) => vec![item],
            _ => return Err(BackendError::new("insert requires an object payload").with_status(400)),
        };

        let now = timestamp();
        let mut inserted = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let Value::Object(mut map) = payload else {
                return Err(BackendError::new("insert requires an object payload").with_status(400));
            };
            map.entry("id")
                .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
            map.insert("created_at".to_string(), Value::String(now.clone()));
            map.insert("updated_at".to_string(), Value::String(now.clone()));
            map.insert(SEQ_COLUMN.to_string(), Value::from(self.next_seq()));
            inserted.push(Value::Object(map));
        }

        self.tables
            .entry(request.table.clone())
            .or_default()
            .extend(inserted.iter().cloned());
        Ok(inserted)
    }

    fn update(&self, request: &RemoteRequest) -> RemoteResult<Vec<Value>> {
        let Some(Value::Object(changes)) = &request.payload else {
            return Err(BackendError::new("update requires an object payload").with_status(400));
        };

        let mut table = self.tables.entry(request.table.clone()).or_default();
        let targets: Vec<usize> = table
            .iter()
            .enumerate()
            .filter(|(_, row)| matches(row, request.filter.as_ref()))
            .map(|(index, _)| index)
            .collect();
        // A failed single-row check leaves the table untouched.
        if request.returning == Returning::Single && targets.len() != 1 {
            return Err(BackendError::no_rows(targets.len()));
        }

        let now = timestamp();
        let mut updated = Vec::with_capacity(targets.len());
        for index in targets {
            let row = &mut table[index];
            if let Value::Object(map) = row {
                merge(map, changes);
                map.insert("updated_at".to_string(), Value::String(now.clone()));
            }
            updated.push(row.clone());
        }
        Ok(updated)
    }

    fn delete(&self, request: &RemoteRequest) -> Vec<Value> {
        let mut table = self.tables.entry(request.table.clone()).or_default();
        let (removed, kept): (Vec<Value>, Vec<Value>) = table
            .drain(..)
            .partition(|row| matches(row, request.filter.as_ref()));
        *table = kept;
        removed
    }
}

impl RemoteClient for MemoryBackend {
    async fn execute(&self, request: RemoteRequest) -> RemoteResult<Vec<Value>> {
        debug!(operation = %request.operation, table = %request.table, "memory request");
        if let Ok(mut log) = self.requests.lock() {
            log.push(request.clone());
        }
        if let Some(err) = self.take_failure() {
            return Err(err);
        }

        let rows = match request.operation {
            Operation::Select => self.select(&request),
            Operation::Insert => self.insert(&request)?,
            Operation::Update => self.update(&request)?,
            Operation::Delete => self.delete(&request),
        };

        match request.returning {
            Returning::Nothing => Ok(Vec::new()),
            Returning::Rows => Ok(rows.iter().map(strip_hidden).collect()),
            Returning::Single if rows.len() == 1 => Ok(rows.iter().map(strip_hidden).collect()),
            Returning::Single => Err(BackendError::no_rows(rows.len())),
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn matches(row: &Value, filter: Option<&Filter>) -> bool {
    let Some(filter) = filter else {
        return true;
    };
    match row.get(&filter.column) {
        Some(Value::String(s)) => *s == filter.value,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == filter.value,
    }
}

fn merge(target: &mut Map<String, Value>, changes: &Map<String, Value>) {
    for (key, value) in changes {
        target.insert(key.clone(), value.clone());
    }
}

/// Order by `order.column`, breaking ties by insertion sequence in the same direction.
fn sort_rows(rows: &mut [Value], order: &Order) {
    rows.sort_by(|a, b| {
        let key = |row: &Value| {
            (
                row.get(&order.column)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                row.get(SEQ_COLUMN).and_then(Value::as_u64).unwrap_or_default(),
            )
        };
        let ordering = key(a).cmp(&key(b));
        if order.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn strip_hidden(row: &Value) -> Value {
    let mut row = row.clone();
    if let Value::Object(map) = &mut row {
        map.remove(SEQ_COLUMN);
    }
    row
}
