//! Tests for the in-memory backend.

use serde_json::json;

use crate::remote::{BackendError, MemoryBackend, RemoteClient, RemoteRequest};

#[tokio::test]
async fn insert_assigns_id_and_timestamps() {
    let backend = MemoryBackend::new();

    let rows = backend
        .execute(RemoteRequest::insert("clients", json!({ "name": "Andi" })))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert!(row["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(row["created_at"].is_string());
    assert_eq!(row["created_at"], row["updated_at"]);
    assert!(row.get("__seq").is_none());
}

#[tokio::test]
async fn insert_keeps_supplied_id() {
    let backend = MemoryBackend::new();

    backend
        .execute(RemoteRequest::insert("users", json!({ "id": "usr-1" })))
        .await
        .unwrap();

    assert_eq!(backend.rows("users")[0]["id"], "usr-1");
}

#[tokio::test]
async fn insert_rejects_non_object_payload() {
    let backend = MemoryBackend::new();

    let err = backend
        .execute(RemoteRequest::insert("clients", json!("nope")))
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(400));
}

#[tokio::test]
async fn select_filters_by_column() {
    let backend = MemoryBackend::new();
    backend.seed("leads", json!({ "id": "a", "name": "A" }));
    backend.seed("leads", json!({ "id": "b", "name": "B" }));

    let rows = backend
        .execute(RemoteRequest::select("leads").eq("id", "b"))
        .await
        .unwrap();

    assert_eq!(rows, vec![json!({ "id": "b", "name": "B" })]);
}

#[tokio::test]
async fn descending_order_breaks_timestamp_ties_by_insertion() {
    let backend = MemoryBackend::new();
    let stamp = "2024-01-01T00:00:00.000000Z";
    backend.seed("sops", json!({ "id": "old", "created_at": stamp }));
    backend.seed("sops", json!({ "id": "new", "created_at": stamp }));
    backend.seed(
        "sops",
        json!({ "id": "oldest", "created_at": "2023-01-01T00:00:00.000000Z" }),
    );

    let rows = backend
        .execute(RemoteRequest::select("sops").order("created_at", false))
        .await
        .unwrap();

    let ids: Vec<&str> = rows.iter().filter_map(|r| r["id"].as_str()).collect();
    assert_eq!(ids, vec!["new", "old", "oldest"]);
}

#[tokio::test]
async fn single_request_fails_unless_exactly_one_row() {
    let backend = MemoryBackend::new();

    let err = backend
        .execute(RemoteRequest::select("profiles").single())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.details.as_deref(), Some("The result contains 0 rows"));

    backend.seed("profiles", json!({ "id": "p1" }));
    backend.seed("profiles", json!({ "id": "p2" }));
    let err = backend
        .execute(RemoteRequest::select("profiles").single())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.details.as_deref(), Some("The result contains 2 rows"));
}

#[tokio::test]
async fn update_merges_only_given_keys() {
    let backend = MemoryBackend::new();
    backend.seed(
        "cards",
        json!({ "id": "c1", "bank_name": "BCA", "balance": 10, "updated_at": "x" }),
    );

    let rows = backend
        .execute(RemoteRequest::update("cards", json!({ "balance": 20 })).eq("id", "c1"))
        .await
        .unwrap();

    assert_eq!(rows[0]["bank_name"], "BCA");
    assert_eq!(rows[0]["balance"], 20);
    assert_ne!(rows[0]["updated_at"], "x");
}

#[tokio::test]
async fn delete_returns_nothing_and_removes_matches() {
    let backend = MemoryBackend::new();
    backend.seed("assets", json!({ "id": "a1" }));
    backend.seed("assets", json!({ "id": "a2" }));

    let rows = backend
        .execute(RemoteRequest::delete("assets").eq("id", "a1"))
        .await
        .unwrap();

    assert!(rows.is_empty());
    assert_eq!(backend.rows("assets"), vec![json!({ "id": "a2" })]);
}

#[tokio::test]
async fn injected_failure_applies_once_and_is_recorded() {
    let backend = MemoryBackend::new();
    backend.fail_next(BackendError::new("boom").with_code("XX000"));

    let err = backend
        .execute(RemoteRequest::select("clients"))
        .await
        .unwrap_err();
    assert_eq!(err.message, "boom");

    assert!(backend.execute(RemoteRequest::select("clients")).await.is_ok());
    assert_eq!(backend.requests().len(), 2);
}

#[tokio::test]
async fn single_update_matching_several_rows_changes_nothing() {
    let backend = MemoryBackend::new();
    backend.seed("profiles", json!({ "id": "p1", "bio": "a" }));
    backend.seed("profiles", json!({ "id": "p2", "bio": "b" }));

    let err = backend
        .execute(RemoteRequest::update("profiles", json!({ "bio": "z" })).single())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        backend.rows("profiles"),
        vec![
            json!({ "id": "p1", "bio": "a" }),
            json!({ "id": "p2", "bio": "b" })
        ]
    );
}

#[tokio::test]
async fn single_update_matching_no_row_changes_nothing() {
    let backend = MemoryBackend::new();
    backend.seed("cards", json!({ "id": "c1", "balance": 10 }));

    let err = backend
        .execute(
            RemoteRequest::update("cards", json!({ "balance": 99 }))
                .eq("id", "missing")
                .single(),
        )
        .await
        .unwrap_err();

    assert_eq!(err.details.as_deref(), Some("The result contains 0 rows"));
    assert_eq!(backend.rows("cards"), vec![json!({ "id": "c1", "balance": 10 })]);
}
