//! Tests for the repository façade, run against the in-memory backend.

use serde_json::json;

use crate::db::models::*;
use crate::db::{DataService, DbError};
use crate::remote::{BackendError, MemoryBackend, Operation, Returning};

fn service() -> DataService<MemoryBackend> {
    DataService::new(MemoryBackend::new())
}

fn new_lead(name: &str) -> NewLead {
    NewLead {
        name: name.to_string(),
        contact_channel: ContactChannel::Instagram,
        location: "Jakarta".to_string(),
        status: LeadStatus::Discussion,
        date: "2024-05-01".to_string(),
        notes: Some("Tanya paket prewedding".to_string()),
        whatsapp: None,
    }
}

fn new_card() -> NewCard {
    NewCard {
        card_holder_name: "Vena Pictures".to_string(),
        bank_name: "BCA".to_string(),
        card_type: CardType::Debit,
        last_four_digits: "4321".to_string(),
        expiry_date: Some("12/27".to_string()),
        balance: 2500000.0,
        color_gradient: "from-blue-500 to-sky-400".to_string(),
    }
}

fn profile_row() -> serde_json::Value {
    json!({
        "id": "pf-1",
        "admin_user_id": "usr-1",
        "full_name": "Nina Lestari",
        "email": "nina@example.com",
        "phone": "0812",
        "company_name": "Vena Pictures",
        "website": "https://vena.example.com",
        "address": "Jl. Melati 1",
        "bank_account": "BCA 123",
        "authorized_signer": "Nina Lestari",
        "id_number": null,
        "bio": "",
        "income_categories": ["DP Proyek"],
        "expense_categories": ["Transport"],
        "project_types": ["Pernikahan"],
        "event_types": ["Meeting"],
        "asset_categories": ["Kamera"],
        "sop_categories": ["Editing"],
        "package_categories": ["Pernikahan"],
        "project_status_config": [
            { "id": "st-1", "name": "Persiapan", "color": "#eab308", "subStatuses": [], "note": "" }
        ],
        "notification_settings": { "newProject": true, "paymentConfirmation": true, "deadlineReminder": false },
        "security_settings": { "twoFactorEnabled": false },
        "briefing_template": "",
        "terms_and_conditions": null,
        "contract_template": null,
        "logo_base64": null,
        "brand_color": "#3b82f6",
        "public_page_config": { "template": "classic", "title": "Vena", "introduction": "Halo", "galleryImages": [] },
        "package_share_template": null,
        "booking_form_template": null,
        "chat_templates": null
    })
}

#[tokio::test]
async fn create_returns_entity_with_assigned_id() {
    let service = service();

    let lead = service.leads().create(&new_lead("Budi")).await.unwrap();

    assert!(!lead.id.is_empty());
    assert_eq!(lead.name, "Budi");
    assert_eq!(lead.notes.as_deref(), Some("Tanya paket prewedding"));
    assert_eq!(lead.whatsapp, None);

    let stored = service.client().rows("leads");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["contact_channel"], "Instagram");
}

#[tokio::test]
async fn list_returns_newest_first() {
    let service = service();
    let leads = service.leads();

    leads.create(&new_lead("first")).await.unwrap();
    leads.create(&new_lead("second")).await.unwrap();
    leads.create(&new_lead("third")).await.unwrap();

    let names: Vec<String> = leads.list().await.unwrap().into_iter().map(|l| l.name).collect();
    assert_eq!(names, vec!["third", "second", "first"]);

    let request = service.client().requests().pop().unwrap();
    assert_eq!(request.operation, Operation::Select);
    let order = request.order.unwrap();
    assert_eq!(order.column, "created_at");
    assert!(!order.ascending);
}

#[tokio::test]
async fn list_of_empty_table_is_empty() {
    let service = service();
    assert!(service.projects().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_returns_the_matching_row() {
    let service = service();
    let created = service.cards().create(&new_card()).await.unwrap();

    let fetched = service.cards().get(&created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_missing_row_is_a_not_found_error() {
    let service = service();

    let err = service.cards().get("missing").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_sends_only_changed_fields_and_keeps_the_rest() {
    let service = service();
    let created = service.cards().create(&new_card()).await.unwrap();

    let patch = CardPatch {
        balance: Some(1000000.0),
        ..Default::default()
    };
    let updated = service.cards().update(&created.id, &patch).await.unwrap();

    assert_eq!(updated.balance, 1000000.0);
    assert_eq!(updated.bank_name, created.bank_name);
    assert_eq!(updated.expiry_date, created.expiry_date);
    assert_eq!(updated.color_gradient, created.color_gradient);

    let request = service.client().requests().pop().unwrap();
    assert_eq!(request.operation, Operation::Update);
    assert_eq!(request.payload, Some(json!({ "balance": 1000000.0 })));
    assert_eq!(request.filter.unwrap().value, created.id);
}

#[tokio::test]
async fn update_with_explicit_null_clears_column() {
    let service = service();
    let created = service.cards().create(&new_card()).await.unwrap();

    let patch = CardPatch {
        expiry_date: Some(None),
        ..Default::default()
    };
    let updated = service.cards().update(&created.id, &patch).await.unwrap();

    assert_eq!(updated.expiry_date, None);
    assert_eq!(updated.balance, created.balance);
}

#[tokio::test]
async fn delete_removes_only_the_given_row() {
    let service = service();
    let keep = service.leads().create(&new_lead("keep")).await.unwrap();
    let gone = service.leads().create(&new_lead("gone")).await.unwrap();

    service.leads().delete(&gone.id).await.unwrap();

    let remaining = service.leads().list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    let request = service.client().requests().into_iter().rev().nth(1).unwrap();
    assert_eq!(request.operation, Operation::Delete);
    assert_eq!(request.returning, Returning::Nothing);
}

#[tokio::test]
async fn every_call_is_a_single_request() {
    let service = service();
    let card = service.cards().create(&new_card()).await.unwrap();
    service.cards().list().await.unwrap();
    service.cards().get(&card.id).await.unwrap();
    service
        .cards()
        .update(&card.id, &CardPatch::default())
        .await
        .unwrap();
    service.cards().delete(&card.id).await.unwrap();

    assert_eq!(service.client().requests().len(), 5);
}

#[tokio::test]
async fn backend_failure_propagates_unchanged() {
    let service = service();
    let failure = BackendError::new("permission denied for table leads").with_code("42501");

    service.client().fail_next(failure.clone());
    let err = service.leads().list().await.unwrap_err();
    assert!(matches!(&err, DbError::Backend(e) if *e == failure));
    assert_eq!(err.to_string(), "permission denied for table leads");

    service.client().fail_next(failure.clone());
    let err = service.leads().create(&new_lead("x")).await.unwrap_err();
    assert_eq!(err.to_string(), "permission denied for table leads");

    service.client().fail_next(failure.clone());
    let err = service.leads().delete("x").await.unwrap_err();
    assert_eq!(err.to_string(), "permission denied for table leads");

    assert!(service.client().rows("leads").is_empty());
}

#[tokio::test]
async fn malformed_row_is_an_invalid_row_error() {
    let service = service();
    service.client().seed(
        "team_members",
        json!({
            "id": "tm-1",
            "name": "Sari",
            "role": "Fotografer",
            "email": "sari@example.com",
            "phone": "0813",
            "standard_fee": "tujuh ratus",
            "no_rek": null,
            "reward_balance": 0,
            "rating": 5,
            "performance_notes": [],
            "portal_access_id": "portal-sari",
            "created_at": "2024-01-01T00:00:00.000000Z"
        }),
    );

    let err = service.team_members().list().await.unwrap_err();

    assert!(matches!(err, DbError::InvalidRow { entity: "team member", .. }));
}

#[tokio::test]
async fn profile_on_empty_table_is_none() {
    let service = service();

    let profile = service.profile().await.unwrap();

    assert!(profile.is_none());
}

#[tokio::test]
async fn profile_returns_the_single_row() {
    let service = service();
    service.client().seed("profiles", profile_row());

    let profile = service.profile().await.unwrap().unwrap();

    assert_eq!(profile.company_name, "Vena Pictures");
    assert!(profile.notification_settings.new_project);
    assert_eq!(profile.project_status_config[0].name, "Persiapan");
}

#[tokio::test]
async fn profile_lookup_propagates_other_failures() {
    let service = service();
    service
        .client()
        .fail_next(BackendError::new("JWT expired").with_code("PGRST301"));

    let err = service.profile().await.unwrap_err();

    assert_eq!(err.to_string(), "JWT expired");
}

#[tokio::test]
async fn update_profile_applies_patch_without_filter() {
    let service = service();
    service.client().seed("profiles", profile_row());

    let patch = ProfilePatch {
        brand_color: Some(None),
        bio: Some("Fotografer pernikahan".to_string()),
        ..Default::default()
    };
    let profile = service.update_profile(&patch).await.unwrap();

    assert_eq!(profile.bio, "Fotografer pernikahan");
    assert_eq!(profile.brand_color, None);
    assert_eq!(profile.admin_user_id, "usr-1");

    let request = service.client().requests().pop().unwrap();
    assert!(request.filter.is_none());
    assert_eq!(
        request.payload,
        Some(json!({ "bio": "Fotografer pernikahan", "brand_color": null }))
    );
}

#[tokio::test]
async fn update_profile_on_empty_table_fails() {
    let service = service();

    let err = service
        .update_profile(&ProfilePatch::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn team_payouts_use_their_own_tables() {
    let service = service();

    let fee = service
        .team_project_payments()
        .create(&NewTeamProjectPayment {
            project_id: "pr-1".to_string(),
            team_member_name: "Sari".to_string(),
            team_member_id: "tm-1".to_string(),
            date: "2024-08-20".to_string(),
            status: FeeStatus::Unpaid,
            fee: 750000.0,
            reward: Some(50000.0),
        })
        .await
        .unwrap();

    let slip = service
        .team_payment_records()
        .create(&NewTeamPaymentRecord {
            record_number: "PAY-FR-001".to_string(),
            team_member_id: "tm-1".to_string(),
            date: "2024-08-31".to_string(),
            project_payment_ids: vec![fee.id.clone()],
            total_amount: 750000.0,
            vendor_signature: None,
        })
        .await
        .unwrap();

    let paid = service
        .team_project_payments()
        .update(
            &fee.id,
            &TeamProjectPaymentPatch {
                status: Some(FeeStatus::Paid),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(paid.status, FeeStatus::Paid);
    assert_eq!(paid.reward, Some(50000.0));
    assert_eq!(slip.project_payment_ids, vec![fee.id]);

    let backend = service.client();
    assert_eq!(backend.rows("team_project_payments").len(), 1);
    assert_eq!(backend.rows("team_payment_records").len(), 1);
    assert!(backend.rows("reward_ledger_entries").is_empty());
}

#[tokio::test]
async fn reward_ledger_lists_newest_entry_first() {
    let service = service();
    let ledger = service.reward_ledger_entries();
    for (description, amount) in [("Bonus proyek", 50000.0), ("Penarikan", -20000.0)] {
        ledger
            .create(&NewRewardLedgerEntry {
                team_member_id: "tm-1".to_string(),
                date: "2024-09-01".to_string(),
                description: description.to_string(),
                amount,
                project_id: None,
            })
            .await
            .unwrap();
    }

    let entries = ledger.list().await.unwrap();

    let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Penarikan", "Bonus proyek"]);
}

#[tokio::test]
async fn contract_signature_can_be_cleared() {
    let service = service();
    service.client().seed(
        "contracts",
        json!({
            "id": "ctr-1",
            "contract_number": "VP/CTR/2024/001",
            "client_id": "cl-1",
            "project_id": "pr-1",
            "signing_date": "2024-06-01",
            "signing_location": "Bandung",
            "client_name1": "Rina",
            "client_address1": "Jl. Asia Afrika 2",
            "client_phone1": "0812",
            "shooting_duration": "8 jam",
            "guaranteed_photos": "300 foto",
            "album_details": "1 album",
            "digital_files_format": "JPG",
            "other_items": "-",
            "personnel_count": "3 orang",
            "delivery_timeframe": "30 hari",
            "dp_date": "2024-06-02",
            "final_payment_date": "2024-08-10",
            "cancellation_policy": "DP hangus",
            "jurisdiction": "Bandung",
            "client_signature": "data:image/png;base64,AAAA"
        }),
    );

    let contract = service
        .contracts()
        .update(
            "ctr-1",
            &ContractPatch {
                client_signature: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(contract.client_signature, None);
    assert_eq!(contract.jurisdiction, "Bandung");
}
