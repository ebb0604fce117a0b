use std::sync::Arc;

use tokio::sync::oneshot;

use crate::db::{DataService, NewSop};
use crate::remote::{BackendError, MemoryBackend};
use crate::tracker::OperationTracker;

#[tokio::test]
async fn successful_call_returns_value_and_leaves_no_error() {
    let tracker = OperationTracker::new();

    let value = tracker.run(async { Ok::<_, String>(42) }).await;

    assert_eq!(value, Some(42));
    assert!(!tracker.is_busy());
    assert_eq!(tracker.last_error(), None);
}

#[tokio::test]
async fn failed_call_records_message_and_returns_none() {
    let tracker = OperationTracker::new();

    let value = tracker
        .run(async { Err::<i32, _>("connection refused") })
        .await;

    assert_eq!(value, None);
    assert!(!tracker.is_busy());
    assert_eq!(tracker.last_error().as_deref(), Some("connection refused"));
}

#[tokio::test]
async fn new_call_clears_previous_error() {
    let tracker = OperationTracker::new();
    tracker.run(async { Err::<(), _>("first failure") }).await;

    tracker.run(async { Ok::<_, String>(()) }).await;

    assert_eq!(tracker.last_error(), None);
}

#[tokio::test]
async fn busy_while_call_is_pending() {
    let tracker = Arc::new(OperationTracker::new());
    let (tx, rx) = oneshot::channel::<i32>();

    let handle = {
        let tracker = Arc::clone(&tracker);
        tokio::spawn(async move { tracker.run(async move { rx.await }).await })
    };

    while !tracker.is_busy() {
        tokio::task::yield_now().await;
    }
    assert!(tracker.is_busy());

    tx.send(7).unwrap();
    assert_eq!(handle.await.unwrap(), Some(7));
    assert!(!tracker.is_busy());
}

#[tokio::test]
async fn wraps_facade_failures() {
    let tracker = OperationTracker::new();
    let service = DataService::new(MemoryBackend::new());
    service
        .client()
        .fail_next(BackendError::new("relation \"sops\" does not exist").with_code("42P01"));

    let draft = NewSop {
        title: "Backup file".to_string(),
        category: "Editing".to_string(),
        content: "Salin ke dua drive".to_string(),
        last_updated: "2024-06-01".to_string(),
    };
    let created = tracker.run(service.sops().create(&draft)).await;

    assert!(created.is_none());
    assert_eq!(
        tracker.last_error().as_deref(),
        Some("relation \"sops\" does not exist")
    );

    let created = tracker.run(service.sops().create(&draft)).await;
    assert_eq!(created.map(|s| s.title), Some("Backup file".to_string()));
    assert_eq!(tracker.last_error(), None);
}
