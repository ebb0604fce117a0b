//! Tests for domain models.

use serde_json::json;

use crate::db::models::*;

#[test]
fn client_status_deserializes_from_stored_strings() {
    let active: ClientStatus = serde_json::from_str("\"Aktif\"").unwrap();
    assert_eq!(active, ClientStatus::Active);

    let inactive: ClientStatus = serde_json::from_str("\"Tidak Aktif\"").unwrap();
    assert_eq!(inactive, ClientStatus::Inactive);
}

#[test]
fn payment_status_serializes_to_stored_strings() {
    assert_eq!(
        serde_json::to_value(PaymentStatus::DownPaymentPaid).unwrap(),
        json!("DP Terbayar")
    );
    assert_eq!(PaymentStatus::default(), PaymentStatus::Unpaid);
}

#[test]
fn unknown_enum_value_passes_through_verbatim() {
    let status: LeadStatus = serde_json::from_str("\"Batal\"").unwrap();
    assert_eq!(status, LeadStatus::Other("Batal".to_string()));
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"Batal\"");
}

#[test]
fn enum_parses_from_str_and_displays_stored_value() {
    let method: PaymentMethod = "E-Wallet".parse().unwrap();
    assert_eq!(method, PaymentMethod::EWallet);
    assert_eq!(method.to_string(), "E-Wallet");
    assert_eq!(PocketIcon::from("piggy-bank"), PocketIcon::PiggyBank);
}

#[test]
fn assigned_team_member_accepts_string_fee() {
    let member: AssignedTeamMember = serde_json::from_value(json!({
        "memberId": "tm-1",
        "name": "Sari",
        "role": "Fotografer",
        "fee": "750000",
        "reward": 0
    }))
    .unwrap();

    assert_eq!(member.fee, 750000.0);
    assert_eq!(member.reward, Some(0.0));
    assert_eq!(member.sub_job, None);
}

#[test]
fn blob_with_wrong_shape_is_rejected() {
    let result = serde_json::from_value::<Revision>(json!({
        "id": "rev-1",
        "date": "2024-05-01"
    }));
    assert!(result.is_err());
}

#[test]
fn printing_item_uses_type_key() {
    let item = PrintingItem {
        id: "p-1".to_string(),
        kind: "Album".to_string(),
        custom_name: None,
        details: "20x30".to_string(),
        cost: 150000.0,
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["type"], "Album");
    assert!(value.get("customName").is_none());
}

#[test]
fn patch_distinguishes_missing_from_null() {
    let patch: LeadPatch = serde_json::from_value(json!({ "notes": null })).unwrap();
    assert_eq!(patch.notes, Some(None));
    assert_eq!(patch.whatsapp, None);

    let patch: LeadPatch = serde_json::from_value(json!({ "whatsapp": "0812" })).unwrap();
    assert_eq!(patch.whatsapp, Some(Some("0812".to_string())));
}

#[test]
fn entities_serialize_with_camel_case_keys() {
    let card = Card {
        id: "c-1".to_string(),
        card_holder_name: "Studio".to_string(),
        bank_name: "BCA".to_string(),
        card_type: CardType::Debit,
        last_four_digits: "1234".to_string(),
        expiry_date: None,
        balance: 10.5,
        color_gradient: "from-blue-500 to-sky-400".to_string(),
    };
    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["cardHolderName"], "Studio");
    assert_eq!(value["lastFourDigits"], "1234");
    assert_eq!(value["cardType"], "Debit");
}

#[test]
fn new_project_fills_defaults_for_missing_fields() {
    let draft: NewProject = serde_json::from_value(json!({
        "projectName": "Wedding A&B",
        "clientId": "cl-1"
    }))
    .unwrap();

    assert_eq!(draft.project_name, "Wedding A&B");
    assert_eq!(draft.payment_status, PaymentStatus::Unpaid);
    assert!(draft.add_ons.is_empty());
    assert_eq!(draft.discount_amount, None);
}
