//! Packages and add-ons offered to clients.

use serde::{Deserialize, Serialize};

use super::{Id, PhysicalItem};
use crate::serde_utils::{double_option, number_or_string};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Id,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub physical_items: Vec<PhysicalItem>,
    pub digital_items: Vec<String>,
    pub processing_time: String,
    pub default_printing_cost: Option<f64>,
    pub default_transport_cost: Option<f64>,
    pub photographers: Option<String>,
    pub videographers: Option<String>,
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPackage {
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub physical_items: Vec<PhysicalItem>,
    #[serde(default)]
    pub digital_items: Vec<String>,
    pub processing_time: String,
    #[serde(default)]
    pub default_printing_cost: Option<f64>,
    #[serde(default)]
    pub default_transport_cost: Option<f64>,
    #[serde(default)]
    pub photographers: Option<String>,
    #[serde(default)]
    pub videographers: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub physical_items: Option<Vec<PhysicalItem>>,
    pub digital_items: Option<Vec<String>>,
    pub processing_time: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub default_printing_cost: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub default_transport_cost: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub photographers: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub videographers: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_image: Option<Option<String>>,
}

/// An optional extra sold on top of a package.
///
/// Also embedded by value in a project's `addOns` list, where older rows may
/// carry the price as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: Id,
    pub name: String,
    #[serde(deserialize_with = "number_or_string")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAddOn {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}
