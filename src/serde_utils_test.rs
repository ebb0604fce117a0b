use serde::Deserialize;
use serde_json::json;

use crate::serde_utils::{double_option, number_or_string, opt_number_or_string};

#[derive(Debug, Deserialize)]
struct Money {
    #[serde(deserialize_with = "number_or_string")]
    amount: f64,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    discount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Patch {
    #[serde(default, deserialize_with = "double_option")]
    notes: Option<Option<String>>,
}

#[test]
fn number_or_string_accepts_both_forms() {
    let from_number: Money = serde_json::from_value(json!({ "amount": 1500 })).unwrap();
    assert_eq!(from_number.amount, 1500.0);

    let from_string: Money = serde_json::from_value(json!({ "amount": " 1500.25 " })).unwrap();
    assert_eq!(from_string.amount, 1500.25);
}

#[test]
fn number_or_string_rejects_non_numeric_text() {
    let err = serde_json::from_value::<Money>(json!({ "amount": "abc" })).unwrap_err();
    assert!(err.to_string().contains("expected a numeric string"));
}

#[test]
fn optional_money_keeps_zero_and_absence_apart() {
    let zero: Money = serde_json::from_value(json!({ "amount": 1, "discount": "0" })).unwrap();
    assert_eq!(zero.discount, Some(0.0));

    let null: Money = serde_json::from_value(json!({ "amount": 1, "discount": null })).unwrap();
    assert_eq!(null.discount, None);

    let missing: Money = serde_json::from_value(json!({ "amount": 1 })).unwrap();
    assert_eq!(missing.discount, None);
}

#[test]
fn double_option_distinguishes_missing_null_and_value() {
    let missing: Patch = serde_json::from_value(json!({})).unwrap();
    assert_eq!(missing.notes, None);

    let null: Patch = serde_json::from_value(json!({ "notes": null })).unwrap();
    assert_eq!(null.notes, Some(None));

    let value: Patch = serde_json::from_value(json!({ "notes": "hi" })).unwrap();
    assert_eq!(value.notes, Some(Some("hi".to_string())));
}
