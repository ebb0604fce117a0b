//! `packages` and `add_ons` tables.

use serde::{Deserialize, Serialize};

use crate::db::models::PhysicalItem;
use crate::serde_utils::{number_or_string, opt_number_or_string};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PackageRow {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
    pub category: String,
    pub physical_items: Vec<PhysicalItem>,
    pub digital_items: Vec<String>,
    pub processing_time: String,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub default_printing_cost: Option<f64>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub default_transport_cost: Option<f64>,
    pub photographers: Option<String>,
    pub videographers: Option<String>,
    pub cover_image: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackageWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_items: Option<Vec<PhysicalItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_items: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_printing_cost: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_transport_cost: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photographers: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videographers: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddOnRow {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddOnWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}
