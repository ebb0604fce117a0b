//! Clients and leads.

use serde::{Deserialize, Serialize};

use super::{ClientStatus, ClientType, ContactChannel, Id, LeadStatus};
use crate::serde_utils::double_option;

/// A paying (or prospective) customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: Option<String>,
    /// Date the client relationship started.
    pub since: String,
    pub instagram: Option<String>,
    pub status: ClientStatus,
    pub client_type: ClientType,
    pub last_contact: String,
    /// Token for the client's self-service portal link.
    pub portal_access_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub whatsapp: Option<String>,
    pub since: String,
    #[serde(default)]
    pub instagram: Option<String>,
    pub status: ClientStatus,
    pub client_type: ClientType,
    pub last_contact: String,
    pub portal_access_id: String,
}

/// Partial client update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub whatsapp: Option<Option<String>>,
    pub since: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub instagram: Option<Option<String>>,
    pub status: Option<ClientStatus>,
    pub client_type: Option<ClientType>,
    pub last_contact: Option<String>,
    pub portal_access_id: Option<String>,
}

/// A prospective booking that has not become a client yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Id,
    pub name: String,
    pub contact_channel: ContactChannel,
    pub location: String,
    pub status: LeadStatus,
    pub date: String,
    pub notes: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub contact_channel: ContactChannel,
    pub location: String,
    pub status: LeadStatus,
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPatch {
    pub name: Option<String>,
    pub contact_channel: Option<ContactChannel>,
    pub location: Option<String>,
    pub status: Option<LeadStatus>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub whatsapp: Option<Option<String>>,
}
