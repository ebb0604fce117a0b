//! Back-office records: equipment, promo codes, SOP documents and in-app
//! notifications.

use serde::{Deserialize, Serialize};

use super::{AssetStatus, DiscountType, Id, NotificationLink};
use crate::serde_utils::double_option;

/// A piece of studio equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Id,
    pub name: String,
    pub category: String,
    pub purchase_date: String,
    pub purchase_price: f64,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub category: String,
    pub purchase_date: String,
    pub purchase_price: f64,
    #[serde(default)]
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub serial_number: Option<Option<String>>,
    pub status: Option<AssetStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCode {
    pub id: Id,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub is_active: bool,
    pub usage_count: i64,
    pub max_usage: Option<i64>,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPromoCode {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub usage_count: i64,
    #[serde(default)]
    pub max_usage: Option<i64>,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCodePatch {
    pub code: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<f64>,
    pub is_active: Option<bool>,
    pub usage_count: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub max_usage: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub expiry_date: Option<Option<String>>,
}

/// A standard operating procedure document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sop {
    pub id: Id,
    pub title: String,
    pub category: String,
    pub content: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSop {
    pub title: String,
    pub category: String,
    pub content: String,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SopPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Id,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub is_read: bool,
    pub icon: String,
    pub link: Option<NotificationLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub is_read: bool,
    pub icon: String,
    #[serde(default)]
    pub link: Option<NotificationLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPatch {
    pub title: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
    pub is_read: Option<bool>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub link: Option<Option<NotificationLink>>,
}
