//! `assets`, `promo_codes`, `sops` and `notifications` tables.

use serde::{Deserialize, Serialize};

use crate::db::models::{AssetStatus, DiscountType, NotificationLink};
use crate::serde_utils::number_or_string;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub purchase_date: String,
    #[serde(deserialize_with = "number_or_string")]
    pub purchase_price: f64,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssetWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PromoCodeRow {
    pub id: String,
    pub code: String,
    pub discount_type: DiscountType,
    #[serde(deserialize_with = "number_or_string")]
    pub discount_value: f64,
    pub is_active: bool,
    pub usage_count: i64,
    pub max_usage: Option<i64>,
    pub expiry_date: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PromoCodeWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_usage: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SopRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub last_updated: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SopWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationRow {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
    pub icon: String,
    pub link: Option<NotificationLink>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Option<NotificationLink>>,
}
