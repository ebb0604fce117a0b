//! `team_members` table.

use serde::{Deserialize, Serialize};

use crate::db::models::PerformanceNote;
use crate::serde_utils::number_or_string;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamMemberRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    #[serde(deserialize_with = "number_or_string")]
    pub standard_fee: f64,
    pub no_rek: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub reward_balance: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub rating: f64,
    pub performance_notes: Vec<PerformanceNote>,
    pub portal_access_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamMemberWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_rek: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_notes: Option<Vec<PerformanceNote>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_access_id: Option<String>,
}
