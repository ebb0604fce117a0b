//! Transactions, pockets (earmarked balances) and payment cards.

use serde::{Deserialize, Serialize};

use super::{CardType, Id, PaymentMethod, PocketIcon, PocketType, TeamMember, TransactionType};
use crate::serde_utils::double_option;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Id,
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub project_id: Option<Id>,
    pub category: String,
    pub method: PaymentMethod,
    pub pocket_id: Option<Id>,
    pub card_id: Option<Id>,
    pub printing_item_id: Option<Id>,
    pub vendor_signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub project_id: Option<Id>,
    pub category: String,
    pub method: PaymentMethod,
    #[serde(default)]
    pub pocket_id: Option<Id>,
    #[serde(default)]
    pub card_id: Option<Id>,
    #[serde(default)]
    pub printing_item_id: Option<Id>,
    #[serde(default)]
    pub vendor_signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    #[serde(default, deserialize_with = "double_option")]
    pub project_id: Option<Option<Id>>,
    pub category: Option<String>,
    pub method: Option<PaymentMethod>,
    #[serde(default, deserialize_with = "double_option")]
    pub pocket_id: Option<Option<Id>>,
    #[serde(default, deserialize_with = "double_option")]
    pub card_id: Option<Option<Id>>,
    #[serde(default, deserialize_with = "double_option")]
    pub printing_item_id: Option<Option<Id>>,
    #[serde(default, deserialize_with = "double_option")]
    pub vendor_signature: Option<Option<String>>,
}

/// A named balance set aside for a purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialPocket {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub icon: PocketIcon,
    #[serde(rename = "type")]
    pub kind: PocketType,
    pub amount: f64,
    pub goal_amount: Option<f64>,
    pub lock_end_date: Option<String>,
    pub members: Option<Vec<TeamMember>>,
    pub source_card_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialPocket {
    pub name: String,
    pub description: String,
    pub icon: PocketIcon,
    #[serde(rename = "type")]
    pub kind: PocketType,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub goal_amount: Option<f64>,
    #[serde(default)]
    pub lock_end_date: Option<String>,
    #[serde(default)]
    pub members: Option<Vec<TeamMember>>,
    #[serde(default)]
    pub source_card_id: Option<Id>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialPocketPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<PocketIcon>,
    #[serde(rename = "type")]
    pub kind: Option<PocketType>,
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub goal_amount: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub lock_end_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub members: Option<Option<Vec<TeamMember>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub source_card_id: Option<Option<Id>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Id,
    pub card_holder_name: String,
    pub bank_name: String,
    pub card_type: CardType,
    pub last_four_digits: String,
    pub expiry_date: Option<String>,
    pub balance: f64,
    /// CSS gradient used to render the card.
    pub color_gradient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub card_holder_name: String,
    pub bank_name: String,
    pub card_type: CardType,
    pub last_four_digits: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub balance: f64,
    pub color_gradient: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    pub card_holder_name: Option<String>,
    pub bank_name: Option<String>,
    pub card_type: Option<CardType>,
    pub last_four_digits: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub expiry_date: Option<Option<String>>,
    pub balance: Option<f64>,
    pub color_gradient: Option<String>,
}
