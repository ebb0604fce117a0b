//! Tests for the PostgREST client against a local mock server.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::config::{Config, ConfigError};
use crate::db::{CardPatch, DataService};
use crate::remote::{PostgrestClient, RemoteClient, RemoteRequest};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
}

#[derive(Clone)]
struct Mock {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

async fn respond(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    mock.seen.lock().unwrap().push(Recorded {
        method,
        uri,
        headers,
        body,
    });
    (mock.status, mock.body.clone())
}

/// Start a server that answers every request with `status` and `body`.
async fn serve(status: StatusCode, body: &str) -> (PostgrestClient, Arc<Mutex<Vec<Recorded>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mock = Mock {
        status,
        body: body.to_string(),
        seen: Arc::clone(&seen),
    };
    let app = Router::new().fallback(respond).with_state(mock);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config::default()
        .with_url(format!("http://{}/", addr))
        .with_anon_key("anon-key-123");
    (PostgrestClient::new(&config).unwrap(), seen)
}

fn last(seen: &Arc<Mutex<Vec<Recorded>>>) -> Recorded {
    seen.lock().unwrap().last().cloned().unwrap()
}

fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k.to_string(), v.to_string())
        })
        .collect()
}

#[test]
fn base_url_appends_rest_path() {
    let config = Config::default()
        .with_url("https://abc.supabase.co/")
        .with_anon_key("key");
    let client = PostgrestClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "https://abc.supabase.co/rest/v1");
}

#[test]
fn new_rejects_invalid_config() {
    assert!(PostgrestClient::new(&Config::default()).is_err());
}

#[test]
fn new_rejects_anon_key_unusable_as_header() {
    let config = Config::default()
        .with_url("https://abc.supabase.co")
        .with_anon_key("key\nwith-newline");

    let err = PostgrestClient::new(&config).err().unwrap();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("anon key"));
}

#[tokio::test]
async fn select_sends_auth_headers_and_ordering() {
    let (client, seen) = serve(StatusCode::OK, "[]").await;

    let rows = client
        .execute(RemoteRequest::select("clients").order("created_at", false))
        .await
        .unwrap();

    assert!(rows.is_empty());
    let request = last(&seen);
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.uri.path(), "/rest/v1/clients");
    let query = query_pairs(&request.uri);
    assert!(query.contains(&("select".to_string(), "*".to_string())));
    assert!(query.contains(&("order".to_string(), "created_at.desc".to_string())));
    assert_eq!(request.headers["apikey"], "anon-key-123");
    assert_eq!(request.headers["authorization"], "Bearer anon-key-123");
}

#[tokio::test]
async fn single_select_filters_by_id_and_asks_for_object() {
    let (client, seen) = serve(StatusCode::OK, r#"{"id":"cl-1","name":"Andi"}"#).await;

    let rows = client
        .execute(RemoteRequest::select("clients").eq("id", "cl-1").single())
        .await
        .unwrap();

    assert_eq!(rows, vec![json!({ "id": "cl-1", "name": "Andi" })]);
    let request = last(&seen);
    assert!(query_pairs(&request.uri).contains(&("id".to_string(), "eq.cl-1".to_string())));
    assert_eq!(
        request.headers["accept"],
        "application/vnd.pgrst.object+json"
    );
}

#[tokio::test]
async fn insert_posts_payload_and_requests_representation() {
    let (client, seen) = serve(StatusCode::CREATED, r#"[{"id":"ld-1","name":"Budi"}]"#).await;

    let rows = client
        .execute(RemoteRequest::insert("leads", json!({ "name": "Budi" })))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let request = last(&seen);
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.headers["prefer"], "return=representation");
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({ "name": "Budi" }));
}

#[tokio::test]
async fn delete_asks_for_minimal_return() {
    let (client, seen) = serve(StatusCode::NO_CONTENT, "").await;

    let rows = client
        .execute(RemoteRequest::delete("cards").eq("id", "cd-9"))
        .await
        .unwrap();

    assert!(rows.is_empty());
    let request = last(&seen);
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.headers["prefer"], "return=minimal");
    assert!(query_pairs(&request.uri).contains(&("id".to_string(), "eq.cd-9".to_string())));
}

#[tokio::test]
async fn error_body_is_parsed() {
    let body = r#"{"code":"PGRST116","details":"The result contains 0 rows","hint":null,"message":"JSON object requested, multiple (or no) rows returned"}"#;
    let (client, _) = serve(StatusCode::NOT_ACCEPTABLE, body).await;

    let err = client
        .execute(RemoteRequest::select("profiles").single())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status, Some(406));
    assert_eq!(err.details.as_deref(), Some("The result contains 0 rows"));
    assert_eq!(
        err.to_string(),
        "JSON object requested, multiple (or no) rows returned"
    );
}

#[tokio::test]
async fn unparsable_error_body_becomes_message() {
    let (client, _) = serve(StatusCode::BAD_GATEWAY, "upstream unavailable").await;

    let err = client
        .execute(RemoteRequest::select("clients"))
        .await
        .unwrap_err();

    assert_eq!(err.message, "upstream unavailable");
    assert_eq!(err.code, None);
    assert_eq!(err.status, Some(502));
}

#[tokio::test]
async fn empty_error_body_uses_status_reason() {
    let (client, _) = serve(StatusCode::UNAUTHORIZED, "").await;

    let err = client
        .execute(RemoteRequest::select("clients"))
        .await
        .unwrap_err();

    assert_eq!(err.message, "Unauthorized");
}

#[tokio::test]
async fn unreachable_backend_is_a_backend_error_without_code() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::default()
        .with_url(format!("http://{}", addr))
        .with_anon_key("key");
    let client = PostgrestClient::new(&config).unwrap();

    let err = client
        .execute(RemoteRequest::select("clients"))
        .await
        .unwrap_err();

    assert_eq!(err.code, None);
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn facade_update_sends_patch_to_filtered_row() {
    let row = json!({
        "id": "cd-1",
        "card_holder_name": "Studio",
        "bank_name": "BCA",
        "card_type": "Debit",
        "last_four_digits": "1234",
        "expiry_date": null,
        "balance": "500000.00",
        "color_gradient": "from-blue-500 to-sky-400",
        "created_at": "2024-01-01T00:00:00+00:00",
        "updated_at": "2024-02-01T00:00:00+00:00"
    });
    let (client, seen) = serve(StatusCode::OK, &row.to_string()).await;
    let service = DataService::new(client);

    let patch = CardPatch {
        balance: Some(500000.0),
        ..Default::default()
    };
    let card = service.cards().update("cd-1", &patch).await.unwrap();

    assert_eq!(card.balance, 500000.0);
    let request = last(&seen);
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.uri.path(), "/rest/v1/cards");
    assert!(query_pairs(&request.uri).contains(&("id".to_string(), "eq.cd-1".to_string())));
    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body, json!({ "balance": 500000.0 }));
}
