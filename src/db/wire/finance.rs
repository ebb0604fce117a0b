//! `transactions`, `financial_pockets` and `cards` tables.

use serde::{Deserialize, Serialize};

use crate::db::models::{
    CardType, PaymentMethod, PocketIcon, PocketType, TeamMember, TransactionType,
};
use crate::serde_utils::{number_or_string, opt_number_or_string};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub project_id: Option<String>,
    pub category: String,
    pub method: PaymentMethod,
    pub pocket_id: Option<String>,
    pub card_id: Option<String>,
    pub printing_item_id: Option<String>,
    pub vendor_signature: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pocket_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printing_item_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_signature: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinancialPocketRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: PocketIcon,
    #[serde(rename = "type")]
    pub kind: PocketType,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub goal_amount: Option<f64>,
    pub lock_end_date: Option<String>,
    pub members: Option<Vec<TeamMember>>,
    pub source_card_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinancialPocketWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<PocketIcon>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PocketType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_amount: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_end_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Option<Vec<TeamMember>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_card_id: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardRow {
    pub id: String,
    pub card_holder_name: String,
    pub bank_name: String,
    pub card_type: CardType,
    pub last_four_digits: String,
    pub expiry_date: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub balance: f64,
    pub color_gradient: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CardWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_gradient: Option<String>,
}
