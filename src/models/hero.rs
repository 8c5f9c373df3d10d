//! Home hero image model.

use serde::{Deserialize, Serialize};

/// A full-bleed background image shown in the landing page slideshow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeHeroImage {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Epoch milliseconds
    #[serde(deserialize_with = "super::deserialize_millis")]
    pub created_at: i64,
}

/// Order newest first. The sort is stable, so equal timestamps keep store order.
pub fn sort_newest_first(images: &mut [HomeHeroImage]) {
    images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
