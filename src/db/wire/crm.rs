//! `clients` and `leads` tables.

use serde::{Deserialize, Serialize};

use crate::db::models::{ClientStatus, ClientType, ContactChannel, LeadStatus};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    pub since: String,
    pub instagram: Option<String>,
    pub status: ClientStatus,
    pub client_type: ClientType,
    pub last_contact: String,
    pub portal_access_id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_access_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeadRow {
    pub id: String,
    pub name: String,
    pub contact_channel: ContactChannel,
    pub location: String,
    pub status: LeadStatus,
    pub date: String,
    pub notes: Option<String>,
    pub whatsapp: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_channel: Option<ContactChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<Option<String>>,
}
