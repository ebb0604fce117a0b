//! The business profile (a single row) and application users.

use serde::{Deserialize, Serialize};

use super::{
    ChatTemplate, Id, NotificationSettings, ProjectStatusConfig, PublicPageConfig,
    SecuritySettings, UserRole,
};
use crate::serde_utils::double_option;

/// Business profile and app-wide settings. The table holds exactly one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Id,
    pub admin_user_id: Id,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub website: String,
    pub address: String,
    pub bank_account: String,
    pub authorized_signer: String,
    pub id_number: Option<String>,
    pub bio: String,
    pub income_categories: Vec<String>,
    pub expense_categories: Vec<String>,
    pub project_types: Vec<String>,
    pub event_types: Vec<String>,
    pub asset_categories: Vec<String>,
    pub sop_categories: Vec<String>,
    pub package_categories: Vec<String>,
    pub project_status_config: Vec<ProjectStatusConfig>,
    pub notification_settings: NotificationSettings,
    pub security_settings: SecuritySettings,
    pub briefing_template: String,
    pub terms_and_conditions: Option<String>,
    pub contract_template: Option<String>,
    pub logo_base64: Option<String>,
    pub brand_color: Option<String>,
    pub public_page_config: PublicPageConfig,
    pub package_share_template: Option<String>,
    pub booking_form_template: Option<String>,
    pub chat_templates: Option<Vec<ChatTemplate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub admin_user_id: Id,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub bank_account: String,
    #[serde(default)]
    pub authorized_signer: String,
    #[serde(default)]
    pub id_number: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub income_categories: Vec<String>,
    #[serde(default)]
    pub expense_categories: Vec<String>,
    #[serde(default)]
    pub project_types: Vec<String>,
    #[serde(default)]
    pub event_types: Vec<String>,
    #[serde(default)]
    pub asset_categories: Vec<String>,
    #[serde(default)]
    pub sop_categories: Vec<String>,
    #[serde(default)]
    pub package_categories: Vec<String>,
    #[serde(default)]
    pub project_status_config: Vec<ProjectStatusConfig>,
    pub notification_settings: NotificationSettings,
    pub security_settings: SecuritySettings,
    #[serde(default)]
    pub briefing_template: String,
    #[serde(default)]
    pub terms_and_conditions: Option<String>,
    #[serde(default)]
    pub contract_template: Option<String>,
    #[serde(default)]
    pub logo_base64: Option<String>,
    #[serde(default)]
    pub brand_color: Option<String>,
    pub public_page_config: PublicPageConfig,
    #[serde(default)]
    pub package_share_template: Option<String>,
    #[serde(default)]
    pub booking_form_template: Option<String>,
    #[serde(default)]
    pub chat_templates: Option<Vec<ChatTemplate>>,
}

/// Partial profile update. The owning admin user cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub bank_account: Option<String>,
    pub authorized_signer: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub id_number: Option<Option<String>>,
    pub bio: Option<String>,
    pub income_categories: Option<Vec<String>>,
    pub expense_categories: Option<Vec<String>>,
    pub project_types: Option<Vec<String>>,
    pub event_types: Option<Vec<String>>,
    pub asset_categories: Option<Vec<String>>,
    pub sop_categories: Option<Vec<String>>,
    pub package_categories: Option<Vec<String>>,
    pub project_status_config: Option<Vec<ProjectStatusConfig>>,
    pub notification_settings: Option<NotificationSettings>,
    pub security_settings: Option<SecuritySettings>,
    pub briefing_template: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub terms_and_conditions: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub contract_template: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub logo_base64: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub brand_color: Option<Option<String>>,
    pub public_page_config: Option<PublicPageConfig>,
    #[serde(default, deserialize_with = "double_option")]
    pub package_share_template: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub booking_form_template: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub chat_templates: Option<Option<Vec<ChatTemplate>>>,
}

/// An account that can sign in to the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub company_name: Option<String>,
    pub role: UserRole,
    /// Views a `Member` may open; unused for `Admin`.
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub company_name: Option<Option<String>>,
    pub role: Option<UserRole>,
    #[serde(default, deserialize_with = "double_option")]
    pub permissions: Option<Option<Vec<String>>>,
}
