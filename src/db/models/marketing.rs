//! Client feedback and the social media publishing calendar.

use serde::{Deserialize, Serialize};

use super::{Id, PostStatus, PostType, SatisfactionLevel};
use crate::serde_utils::double_option;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFeedback {
    pub id: Id,
    pub client_name: String,
    pub satisfaction: SatisfactionLevel,
    /// Star rating, 1 to 5.
    pub rating: f64,
    pub feedback: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClientFeedback {
    pub client_name: String,
    pub satisfaction: SatisfactionLevel,
    pub rating: f64,
    pub feedback: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFeedbackPatch {
    pub client_name: Option<String>,
    pub satisfaction: Option<SatisfactionLevel>,
    pub rating: Option<f64>,
    pub feedback: Option<String>,
    pub date: Option<String>,
}

/// A planned or published post showcasing a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPost {
    pub id: Id,
    pub project_id: Id,
    pub client_name: String,
    pub post_type: PostType,
    pub platform: String,
    pub scheduled_date: String,
    pub caption: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSocialMediaPost {
    pub project_id: Id,
    pub client_name: String,
    pub post_type: PostType,
    pub platform: String,
    pub scheduled_date: String,
    pub caption: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaPostPatch {
    pub project_id: Option<Id>,
    pub client_name: Option<String>,
    pub post_type: Option<PostType>,
    pub platform: Option<String>,
    pub scheduled_date: Option<String>,
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub media_url: Option<Option<String>>,
    pub status: Option<PostStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}
