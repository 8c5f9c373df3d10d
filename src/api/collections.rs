//! Collection read endpoints.
//!
//! These follow the page contract: a store fault answers with an empty list.

use std::num::NonZeroUsize;

use axum::extract::State;
use serde::Deserialize;

use super::{success, ApiQuery, ApiResult};
use crate::access::DEFAULT_LATEST_LIMIT;
use crate::errors::AppError;
use crate::models::{GalleryItem, HomeHeroImage, ServiceItem};
use crate::AppState;

/// Query parameters for the latest gallery items.
#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    /// Maximum number of items (default: 6).
    #[serde(default)]
    pub limit: Option<usize>,
}

/// GET /api/gallery - List all gallery items.
pub async fn list_gallery(State(state): State<AppState>) -> ApiResult<Vec<GalleryItem>> {
    success(state.data.gallery_items().await)
}

/// GET /api/gallery/latest - First N gallery items.
pub async fn latest_gallery(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<LatestQuery>,
) -> ApiResult<Vec<GalleryItem>> {
    let limit = match params.limit {
        None => DEFAULT_LATEST_LIMIT,
        Some(n) => NonZeroUsize::new(n)
            .ok_or_else(|| AppError::invalid_field("limit", "Limit must be a positive integer"))?,
    };

    success(state.data.latest_gallery_items(limit).await)
}

/// GET /api/hero - Hero images, newest first.
pub async fn list_hero_images(State(state): State<AppState>) -> ApiResult<Vec<HomeHeroImage>> {
    success(state.data.home_hero_images().await)
}

/// GET /api/services - List all services.
pub async fn list_services(State(state): State<AppState>) -> ApiResult<Vec<ServiceItem>> {
    success(state.data.services().await)
}
