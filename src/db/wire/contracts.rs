//! `contracts` table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContractRow {
    pub id: String,
    pub contract_number: String,
    pub client_id: String,
    pub project_id: String,
    pub signing_date: String,
    pub signing_location: String,
    pub client_name1: String,
    pub client_address1: String,
    pub client_phone1: String,
    pub client_name2: Option<String>,
    pub client_address2: Option<String>,
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
    pub vendor_signature: Option<String>,
    pub client_signature: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_phone1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name2: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_address2: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_phone2: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shooting_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guaranteed_photos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_files_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personnel_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_timeframe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_signature: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_signature: Option<Option<String>>,
}
