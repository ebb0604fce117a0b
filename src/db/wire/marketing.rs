//! `client_feedback` and `social_media_posts` tables.

use serde::{Deserialize, Serialize};

use crate::db::models::{PostStatus, PostType, SatisfactionLevel};
use crate::serde_utils::number_or_string;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientFeedbackRow {
    pub id: String,
    pub client_name: String,
    pub satisfaction: SatisfactionLevel,
    #[serde(deserialize_with = "number_or_string")]
    pub rating: f64,
    pub feedback: String,
    pub date: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientFeedbackWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<SatisfactionLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialMediaPostRow {
    pub id: String,
    pub project_id: String,
    pub client_name: String,
    pub post_type: PostType,
    pub platform: String,
    pub scheduled_date: String,
    pub caption: String,
    pub media_url: Option<String>,
    pub status: PostStatus,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SocialMediaPostWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<PostType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}
