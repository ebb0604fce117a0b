//! Signed work agreements between the studio and a client for one project.

use serde::{Deserialize, Serialize};

use super::Id;
use crate::serde_utils::double_option;

/// A contract. A second client party (e.g. the partner in a wedding) is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Id,
    pub contract_number: String,
    pub client_id: Id,
    pub project_id: Id,
    pub signing_date: String,
    pub signing_location: String,
    pub client_name1: String,
    pub client_address1: String,
    pub client_phone1: String,
    #[serde(default)]
    pub client_name2: Option<String>,
    #[serde(default)]
    pub client_address2: Option<String>,
    #[serde(default)]
    pub client_phone2: Option<String>,
    pub shooting_duration: String,
    pub guaranteed_photos: String,
    pub album_details: String,
    pub digital_files_format: String,
    pub other_items: String,
    pub personnel_count: String,
    pub delivery_timeframe: String,
    pub dp_date: String,
    pub final_payment_date: String,
    pub cancellation_policy: String,
    pub jurisdiction: String,
    /// Signature image (data URL).
    #[serde(default)]
    pub vendor_signature: Option<String>,
    #[serde(default)]
    pub client_signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContract {
    pub contract_number: String,
    pub client_id: Id,
    pub project_id: Id,
    pub signing_date: String,
    pub signing_location: String,
    pub client_name1: String,
    pub client_address1: String,
    pub client_phone1: String,
    #[serde(default)]
    pub client_name2: Option<String>,
    #[serde(default)]
    pub client_address2: Option<String>,
    #[serde(default)]
    pub client_phone2: Option<String>,
    pub shooting_duration: String,
    pub guaranteed_photos: String,
    pub album_details: String,
    pub digital_files_format: String,
    pub other_items: String,
    pub personnel_count: String,
    pub delivery_timeframe: String,
    pub dp_date: String,
    pub final_payment_date: String,
    pub cancellation_policy: String,
    pub jurisdiction: String,
    #[serde(default)]
    pub vendor_signature: Option<String>,
    #[serde(default)]
    pub client_signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPatch {
    pub contract_number: Option<String>,
    pub client_id: Option<Id>,
    pub project_id: Option<Id>,
    pub signing_date: Option<String>,
    pub signing_location: Option<String>,
    pub client_name1: Option<String>,
    pub client_address1: Option<String>,
    pub client_phone1: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub client_name2: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub client_address2: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub client_phone2: Option<Option<String>>,
    pub shooting_duration: Option<String>,
    pub guaranteed_photos: Option<String>,
    pub album_details: Option<String>,
    pub digital_files_format: Option<String>,
    pub other_items: Option<String>,
    pub personnel_count: Option<String>,
    pub delivery_timeframe: Option<String>,
    pub dp_date: Option<String>,
    pub final_payment_date: Option<String>,
    pub cancellation_policy: Option<String>,
    pub jurisdiction: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub vendor_signature: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub client_signature: Option<Option<String>>,
}
