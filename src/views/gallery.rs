//! Gallery page: the portfolio split into photos and videos.

use serde::Serialize;

use super::{PageMount, ViewState};
use crate::access::DataAccess;
use crate::errors::AppError;
use crate::models::{GalleryItem, MediaType};

/// Gallery items split by media type, each side in fetch order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MediaPartition {
    pub photos: Vec<GalleryItem>,
    pub videos: Vec<GalleryItem>,
}

impl MediaPartition {
    pub fn from_items(items: Vec<GalleryItem>) -> Self {
        let (photos, videos) = items
            .into_iter()
            .partition(|item| item.media_type == MediaType::Photo);
        Self { photos, videos }
    }

    /// Keep only the first `limit` photos.
    pub fn with_photo_limit(mut self, limit: usize) -> Self {
        self.photos.truncate(limit);
        self
    }
}

/// The Gallery page: the whole collection, partitioned.
pub struct GalleryView {
    page: PageMount<MediaPartition>,
}

impl GalleryView {
    pub fn mount(data: DataAccess) -> Self {
        let page = PageMount::mount("gallery", async move {
            MediaPartition::from_items(data.gallery_items().await)
        });
        Self { page }
    }

    pub async fn ready(&mut self) -> Result<MediaPartition, AppError> {
        self.page.wait_ready().await
    }

    pub fn snapshot(&self) -> ViewState<MediaPartition> {
        self.page.state()
    }
}
