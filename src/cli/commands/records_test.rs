use serde_json::{Value, json};

use crate::cli::commands::records::*;
use crate::cli::error::CliError;
use crate::db::models::*;
use crate::db::{DataService, DbError};
use crate::remote::MemoryBackend;

fn service() -> DataService<MemoryBackend> {
    DataService::new(MemoryBackend::new())
}

const ADD_ON: &str = r#"{"name": "Drone", "price": 1500000}"#;

#[tokio::test]
async fn list_empty_table_prints_message() {
    let service = service();

    let output = list::<AddOn, _>(&service, "table").await.unwrap();

    assert_eq!(output, "No add-on records found.");
}

#[tokio::test]
async fn create_then_list_as_table() {
    let service = service();

    let output = create::<AddOn, _>(&service, ADD_ON, "table").await.unwrap();
    assert!(output.starts_with("Created add-on "));

    let table = list::<AddOn, _>(&service, "table").await.unwrap();
    assert!(table.contains("Drone"));
    assert!(table.contains("1,500,000"));
    assert!(table.contains("Price"));
}

#[tokio::test]
async fn list_as_json_uses_camel_case() {
    let service = service();
    create::<Card, _>(
        &service,
        r#"{"cardHolderName": "Studio", "bankName": "BCA", "cardType": "Debit",
            "lastFourDigits": "1234", "colorGradient": "from-blue-500"}"#,
        "table",
    )
    .await
    .unwrap();

    let output = list::<Card, _>(&service, "json").await.unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed[0]["cardHolderName"], "Studio");
    assert_eq!(parsed[0]["balance"], json!(0.0));
    assert!(parsed[0].get("card_holder_name").is_none());
}

#[tokio::test]
async fn update_changes_only_given_fields() {
    let service = service();
    let created = create::<AddOn, _>(&service, ADD_ON, "json").await.unwrap();
    let id = serde_json::from_str::<Value>(&created).unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let output = update::<AddOn, _>(&service, &id, r#"{"price": "2000000"}"#, "json").await;

    // Patches are typed: a string price is rejected before any request is made.
    assert!(matches!(output, Err(CliError::InvalidData { .. })));

    let output = update::<AddOn, _>(&service, &id, r#"{"price": 2000000}"#, "json")
        .await
        .unwrap();
    let updated: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(updated["name"], "Drone");
    assert_eq!(updated["price"], json!(2000000.0));
}

#[tokio::test]
async fn invalid_data_is_reported() {
    let service = service();

    let err = create::<Client, _>(&service, "{not json", "table")
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::InvalidData { .. }));
    assert!(service.client().requests().is_empty());
}

#[tokio::test]
async fn delete_requires_force() {
    let service = service();
    let output = create::<AddOn, _>(&service, ADD_ON, "json").await.unwrap();
    let id = serde_json::from_str::<Value>(&output).unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let err = delete::<AddOn, _>(&service, &id, false).await.unwrap_err();
    assert!(matches!(err, CliError::DeleteNotConfirmed { entity: "add-on", .. }));
    assert_eq!(service.client().rows("add_ons").len(), 1);

    let output = delete::<AddOn, _>(&service, &id, true).await.unwrap();
    assert_eq!(output, format!("Deleted add-on {}", id));
    assert!(service.client().rows("add_ons").is_empty());
}

#[tokio::test]
async fn get_missing_record_surfaces_backend_error() {
    let service = service();

    let err = get::<Sop, _>(&service, "missing", "table").await.unwrap_err();

    assert!(matches!(err, CliError::Db(ref e) if e.is_not_found()));
    assert!(matches!(err, CliError::Db(DbError::Backend(_))));
}

#[tokio::test]
async fn profile_absent_prints_message() {
    let service = service();

    let output = profile(&service, "table").await.unwrap();

    assert_eq!(output, "No profile found.");
}
