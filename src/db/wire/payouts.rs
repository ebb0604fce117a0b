//! `team_project_payments`, `team_payment_records` and `reward_ledger_entries`
//! tables.

use serde::{Deserialize, Serialize};

use crate::db::models::FeeStatus;
use crate::serde_utils::{number_or_string, opt_number_or_string};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamProjectPaymentRow {
    pub id: String,
    pub project_id: String,
    pub team_member_name: String,
    pub team_member_id: String,
    pub date: String,
    pub status: FeeStatus,
    #[serde(deserialize_with = "number_or_string")]
    pub fee: f64,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub reward: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamProjectPaymentWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward: Option<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamPaymentRecordRow {
    pub id: String,
    pub record_number: String,
    pub team_member_id: String,
    pub date: String,
    pub project_payment_ids: Vec<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub total_amount: f64,
    pub vendor_signature: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamPaymentRecordWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_payment_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_signature: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RewardLedgerEntryRow {
    pub id: String,
    pub team_member_id: String,
    pub date: String,
    pub description: String,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    pub project_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RewardLedgerEntryWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<String>>,
}
