//! `projects` table.

use serde::{Deserialize, Serialize};

use crate::db::models::{
    AddOn, AssignedTeamMember, BookingStatus, ChatMessage, PaymentStatus, PrintingItem, Revision,
    SubStatusConfig, SubStatusNotes,
};
use crate::serde_utils::{number_or_string, opt_number_or_string};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub project_name: String,
    pub client_name: String,
    pub client_id: String,
    pub project_type: String,
    pub package_name: String,
    pub package_id: String,
    pub add_ons: Vec<AddOn>,
    pub date: String,
    pub deadline_date: Option<String>,
    pub location: String,
    pub progress: i32,
    pub status: String,
    pub active_sub_statuses: Option<Vec<String>>,
    #[serde(deserialize_with = "number_or_string")]
    pub total_cost: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub amount_paid: f64,
    pub payment_status: PaymentStatus,
    pub team: Vec<AssignedTeamMember>,
    pub notes: Option<String>,
    pub accommodation: Option<String>,
    pub drive_link: Option<String>,
    pub client_drive_link: Option<String>,
    pub final_drive_link: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub image: Option<String>,
    pub revisions: Option<Vec<Revision>>,
    pub promo_code_id: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub discount_amount: Option<f64>,
    pub shipping_details: Option<String>,
    pub dp_proof_url: Option<String>,
    pub printing_details: Option<Vec<PrintingItem>>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub printing_cost: Option<f64>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub transport_cost: Option<f64>,
    pub is_editing_confirmed_by_client: Option<bool>,
    pub is_printing_confirmed_by_client: Option<bool>,
    pub is_delivery_confirmed_by_client: Option<bool>,
    pub confirmed_sub_statuses: Option<Vec<String>>,
    pub client_sub_status_notes: Option<SubStatusNotes>,
    pub sub_status_confirmation_sent_at: Option<SubStatusNotes>,
    pub completed_digital_items: Option<Vec<String>>,
    pub invoice_signature: Option<String>,
    pub custom_sub_statuses: Option<Vec<SubStatusConfig>>,
    pub booking_status: Option<BookingStatus>,
    pub rejection_reason: Option<String>,
    pub chat_history: Option<Vec<ChatMessage>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<AddOn>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_sub_statuses: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<AssignedTeamMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_drive_link: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_drive_link: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revisions: Option<Option<Vec<Revision>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp_proof_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printing_details: Option<Option<Vec<PrintingItem>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printing_cost: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_cost: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_editing_confirmed_by_client: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_printing_confirmed_by_client: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_delivery_confirmed_by_client: Option<Option<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_sub_statuses: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_sub_status_notes: Option<Option<SubStatusNotes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_status_confirmation_sent_at: Option<Option<SubStatusNotes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_digital_items: Option<Option<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_signature: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_sub_statuses: Option<Option<Vec<SubStatusConfig>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_status: Option<Option<BookingStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<Option<Vec<ChatMessage>>>,
}
