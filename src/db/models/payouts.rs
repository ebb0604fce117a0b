//! Freelancer payouts: per-project fees, grouped payment slips and the
//! reward ledger behind each member's reward balance.

use serde::{Deserialize, Serialize};

use super::{FeeStatus, Id};
use crate::serde_utils::double_option;

/// The fee owed to one team member for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectPayment {
    pub id: Id,
    pub project_id: Id,
    pub team_member_name: String,
    pub team_member_id: Id,
    pub date: String,
    pub status: FeeStatus,
    pub fee: f64,
    /// Bonus credited to the member's reward balance.
    #[serde(default)]
    pub reward: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamProjectPayment {
    pub project_id: Id,
    pub team_member_name: String,
    pub team_member_id: Id,
    pub date: String,
    pub status: FeeStatus,
    pub fee: f64,
    #[serde(default)]
    pub reward: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectPaymentPatch {
    pub project_id: Option<Id>,
    pub team_member_name: Option<String>,
    pub team_member_id: Option<Id>,
    pub date: Option<String>,
    pub status: Option<FeeStatus>,
    pub fee: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub reward: Option<Option<f64>>,
}

/// A payment slip settling one or more project fees at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPaymentRecord {
    pub id: Id,
    pub record_number: String,
    pub team_member_id: Id,
    pub date: String,
    /// Ids of the settled [`TeamProjectPayment`]s.
    pub project_payment_ids: Vec<Id>,
    pub total_amount: f64,
    #[serde(default)]
    pub vendor_signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamPaymentRecord {
    pub record_number: String,
    pub team_member_id: Id,
    pub date: String,
    #[serde(default)]
    pub project_payment_ids: Vec<Id>,
    pub total_amount: f64,
    #[serde(default)]
    pub vendor_signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPaymentRecordPatch {
    pub record_number: Option<String>,
    pub team_member_id: Option<Id>,
    pub date: Option<String>,
    pub project_payment_ids: Option<Vec<Id>>,
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub vendor_signature: Option<Option<String>>,
}

/// One credit or debit on a team member's reward balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardLedgerEntry {
    pub id: Id,
    pub team_member_id: Id,
    pub date: String,
    pub description: String,
    /// Positive for credits, negative for withdrawals.
    pub amount: f64,
    #[serde(default)]
    pub project_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRewardLedgerEntry {
    pub team_member_id: Id,
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub project_id: Option<Id>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardLedgerEntryPatch {
    pub team_member_id: Option<Id>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub project_id: Option<Option<Id>>,
}
