//! `profiles` and `users` tables.

use serde::{Deserialize, Serialize};

use crate::db::models::{
    ChatTemplate, NotificationSettings, ProjectStatusConfig, PublicPageConfig, SecuritySettings,
    UserRole,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileRow {
    pub id: String,
    pub admin_user_id: String,
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
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_signer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sop_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status_config: Option<Vec<ProjectStatusConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<NotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_settings: Option<SecuritySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub briefing_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_and_conditions: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_template: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_base64: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_page_config: Option<PublicPageConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_share_template: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_form_template: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_templates: Option<Option<Vec<ChatTemplate>>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub company_name: Option<String>,
    pub role: UserRole,
    pub permissions: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Option<Vec<String>>>,
}
