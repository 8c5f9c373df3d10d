//! Data access layer.
//!
//! Typed accessors per collection. Each read comes in two flavours: a strict
//! `try_*` variant that separates a store fault from an empty collection, and
//! the page-facing variant that degrades a fault to an empty result and logs
//! it. Malformed documents are skipped in both.

use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::models::{
    decode_document, sort_newest_first, BookingStatus, GalleryItem, HomeHeroImage, NewBooking,
    ServiceItem,
};
use crate::store::{Collection, DocumentStore, RawDocument, StoreError};

/// Number of items returned by [`DataAccess::latest_gallery_items`] when no limit is given.
pub const DEFAULT_LATEST_LIMIT: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => unreachable!(),
};

/// Result of a strict collection read.
pub type Fetch<T> = Result<Vec<T>, StoreError>;

/// Typed access to the studio collections.
#[derive(Clone)]
pub struct DataAccess {
    store: Arc<dyn DocumentStore>,
}

impl DataAccess {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, collection: Collection) -> Fetch<T> {
        let docs = self.store.list(collection).await?;
        Ok(decode_valid(collection, docs))
    }

    // ==================== STRICT READS ====================

    /// All valid gallery items in store order.
    pub async fn try_gallery_items(&self) -> Fetch<GalleryItem> {
        self.fetch_collection(Collection::Gallery).await
    }

    /// Hero images, newest first.
    pub async fn try_home_hero_images(&self) -> Fetch<HomeHeroImage> {
        let mut images = self.fetch_collection(Collection::HomeHero).await?;
        sort_newest_first(&mut images);
        Ok(images)
    }

    /// Services in store order.
    pub async fn try_services(&self) -> Fetch<ServiceItem> {
        self.fetch_collection(Collection::Services).await
    }

    // ==================== PAGE READS ====================

    pub async fn gallery_items(&self) -> Vec<GalleryItem> {
        or_empty(Collection::Gallery, self.try_gallery_items().await)
    }

    /// The first `limit` gallery items as the store returned them.
    ///
    /// There is no recency ordering behind "latest": the store has no
    /// guaranteed order and gallery documents carry no timestamp.
    pub async fn latest_gallery_items(&self, limit: NonZeroUsize) -> Vec<GalleryItem> {
        let mut items = self.gallery_items().await;
        items.truncate(limit.get());
        items
    }

    pub async fn home_hero_images(&self) -> Vec<HomeHeroImage> {
        or_empty(Collection::HomeHero, self.try_home_hero_images().await)
    }

    pub async fn services(&self) -> Vec<ServiceItem> {
        or_empty(Collection::Services, self.try_services().await)
    }

    // ==================== WRITES ====================

    /// Write a booking and return its identifier.
    ///
    /// The stored status is always `Pending`. Store faults propagate.
    pub async fn create_booking(&self, mut booking: NewBooking) -> Result<String, AppError> {
        booking.status = BookingStatus::Pending;
        let document = booking.to_document(Utc::now().timestamp_millis())?;

        let id = self.store.insert(Collection::Bookings, document).await?;
        tracing::info!(%id, category = %booking.event_category, "Booking created");
        Ok(id)
    }
}

/// Decode every document, quarantining the ones that do not match `T`.
fn decode_valid<T: DeserializeOwned>(collection: Collection, docs: Vec<RawDocument>) -> Vec<T> {
    let total = docs.len();
    let mut items = Vec::with_capacity(total);
    for doc in docs {
        match decode_document(doc) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!(%collection, id = %e.id, reason = %e.reason, "Skipping malformed document"),
        }
    }
    if items.len() < total {
        tracing::warn!(
            %collection,
            skipped = total - items.len(),
            total,
            "Some documents were quarantined"
        );
    }
    items
}

fn or_empty<T>(collection: Collection, result: Fetch<T>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(%collection, "Error fetching {}: {}", collection, e.message);
            Vec::new()
        }
    }
}
