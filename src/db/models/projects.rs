//! Projects: a booked job for a client, with its deliverables, team and
//! billing state.

use serde::{Deserialize, Serialize};

use super::{
    AddOn, AssignedTeamMember, BookingStatus, ChatMessage, Id, PaymentStatus, PrintingItem,
    Revision, SubStatusConfig, SubStatusNotes,
};
use crate::serde_utils::double_option;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub project_name: String,
    pub client_name: String,
    pub client_id: Id,
    pub project_type: String,
    pub package_name: String,
    pub package_id: Id,
    pub add_ons: Vec<AddOn>,
    pub date: String,
    pub deadline_date: Option<String>,
    pub location: String,
    /// Completion percentage, 0-100.
    pub progress: i32,
    /// Name of a status configured on the profile.
    pub status: String,
    pub active_sub_statuses: Option<Vec<String>>,
    pub total_cost: f64,
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
    pub promo_code_id: Option<Id>,
    pub discount_amount: Option<f64>,
    pub shipping_details: Option<String>,
    pub dp_proof_url: Option<String>,
    pub printing_details: Option<Vec<PrintingItem>>,
    pub printing_cost: Option<f64>,
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
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    pub project_name: String,
    pub client_name: String,
    pub client_id: Id,
    pub project_type: String,
    pub package_name: String,
    pub package_id: Id,
    pub add_ons: Vec<AddOn>,
    pub date: String,
    pub deadline_date: Option<String>,
    pub location: String,
    pub progress: i32,
    pub status: String,
    pub active_sub_statuses: Option<Vec<String>>,
    pub total_cost: f64,
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
    pub promo_code_id: Option<Id>,
    pub discount_amount: Option<f64>,
    pub shipping_details: Option<String>,
    pub dp_proof_url: Option<String>,
    pub printing_details: Option<Vec<PrintingItem>>,
    pub printing_cost: Option<f64>,
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
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub project_name: Option<String>,
    pub client_name: Option<String>,
    pub client_id: Option<Id>,
    pub project_type: Option<String>,
    pub package_name: Option<String>,
    pub package_id: Option<Id>,
    pub add_ons: Option<Vec<AddOn>>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub deadline_date: Option<Option<String>>,
    pub location: Option<String>,
    pub progress: Option<i32>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub active_sub_statuses: Option<Option<Vec<String>>>,
    pub total_cost: Option<f64>,
    pub amount_paid: Option<f64>,
    pub payment_status: Option<PaymentStatus>,
    pub team: Option<Vec<AssignedTeamMember>>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub accommodation: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub drive_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub client_drive_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub final_drive_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub revisions: Option<Option<Vec<Revision>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub promo_code_id: Option<Option<Id>>,
    #[serde(default, deserialize_with = "double_option")]
    pub discount_amount: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub shipping_details: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub dp_proof_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub printing_details: Option<Option<Vec<PrintingItem>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub printing_cost: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub transport_cost: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub is_editing_confirmed_by_client: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub is_printing_confirmed_by_client: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub is_delivery_confirmed_by_client: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub confirmed_sub_statuses: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub client_sub_status_notes: Option<Option<SubStatusNotes>>,
    #[serde(default, deserialize_with = "double_option")]
    pub sub_status_confirmation_sent_at: Option<Option<SubStatusNotes>>,
    #[serde(default, deserialize_with = "double_option")]
    pub completed_digital_items: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub invoice_signature: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub custom_sub_statuses: Option<Option<Vec<SubStatusConfig>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub booking_status: Option<Option<BookingStatus>>,
    #[serde(default, deserialize_with = "double_option")]
    pub rejection_reason: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub chat_history: Option<Option<Vec<ChatMessage>>>,
}
