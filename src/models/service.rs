//! Service offering model.

use serde::{Deserialize, Serialize};

/// A photography or videography package listed on the Services page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Free text such as "From ₹25,000"; never parsed as a number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_highlight: Option<bool>,
    #[serde(
        default,
        deserialize_with = "super::deserialize_opt_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<i64>,
}
