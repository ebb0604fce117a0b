//! Freelancers and staff who work on projects.

use serde::{Deserialize, Serialize};

use super::{Id, PerformanceNote};
use crate::serde_utils::{double_option, number_or_string};

/// A team member. Also embedded by value in shared pockets' `members` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Id,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    #[serde(deserialize_with = "number_or_string")]
    pub standard_fee: f64,
    /// Bank account number for payouts.
    #[serde(default)]
    pub no_rek: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub reward_balance: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub rating: f64,
    #[serde(default)]
    pub performance_notes: Vec<PerformanceNote>,
    pub portal_access_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub standard_fee: f64,
    #[serde(default)]
    pub no_rek: Option<String>,
    #[serde(default)]
    pub reward_balance: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub performance_notes: Vec<PerformanceNote>,
    pub portal_access_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub standard_fee: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub no_rek: Option<Option<String>>,
    pub reward_balance: Option<f64>,
    pub rating: Option<f64>,
    pub performance_notes: Option<Vec<PerformanceNote>>,
    pub portal_access_id: Option<String>,
}
