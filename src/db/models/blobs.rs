//! Typed shapes of the JSON columns.
//!
//! The backend stores these as opaque JSON using the application's camelCase
//! keys. Decoding rejects a blob whose shape does not match; extra keys are
//! ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PerformanceNoteType, RevisionStatus};
use crate::serde_utils::{number_or_string, opt_number_or_string};

/// Free-form key/value notes, keyed by sub-status name.
pub type SubStatusNotes = BTreeMap<String, String>;

/// A physical deliverable bundled in a package (album, print, flash drive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalItem {
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
}

/// A team member assigned to a project, with the fee agreed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedTeamMember {
    pub member_id: String,
    pub name: String,
    pub role: String,
    #[serde(deserialize_with = "number_or_string")]
    pub fee: f64,
    #[serde(
        default,
        deserialize_with = "opt_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub reward: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_job: Option<String>,
}

/// An editing revision requested on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub id: String,
    pub date: String,
    pub admin_notes: String,
    pub deadline: String,
    pub freelancer_id: String,
    pub status: RevisionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freelancer_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

/// One printed item ordered for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintingItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    pub details: String,
    #[serde(deserialize_with = "number_or_string")]
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubStatusConfig {
    pub name: String,
    #[serde(default)]
    pub note: String,
}

/// A project status column configured on the business profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatusConfig {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub sub_statuses: Vec<SubStatusConfig>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    /// `vendor` or `client`.
    pub sender: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceNote {
    pub id: String,
    pub date: String,
    pub note: String,
    #[serde(rename = "type")]
    pub kind: PerformanceNoteType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub new_project: bool,
    pub payment_confirmation: bool,
    pub deadline_reminder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
}

/// Layout of the public booking/package page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPageConfig {
    pub template: String,
    pub title: String,
    pub introduction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_base64: Option<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
}

/// A canned chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTemplate {
    pub id: String,
    pub title: String,
    pub template: String,
}

/// Where a notification navigates to when opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLink {
    pub view: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<NotificationAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
