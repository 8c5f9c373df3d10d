//! Document store client.
//!
//! The store is schemaless: documents are JSON objects addressed by collection
//! name and a store-assigned identifier. Only two operations are used, listing
//! a whole collection and inserting one document.

#[cfg(test)]
pub mod fake;
mod seed;
mod sqlite;

pub use seed::*;
pub use sqlite::*;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// The named collections backing the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Gallery,
    HomeHero,
    Services,
    Bookings,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Gallery,
        Collection::HomeHero,
        Collection::Services,
        Collection::Bookings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Gallery => "gallery",
            Collection::HomeHero => "home_hero",
            Collection::Services => "services",
            Collection::Bookings => "bookings",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document as returned by the store, before any typing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: String,
    pub data: Map<String, Value>,
}

/// Failure talking to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreError {
    pub collection: Collection,
    pub message: String,
}

impl StoreError {
    pub fn new(collection: Collection, message: impl Into<String>) -> Self {
        Self {
            collection,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.collection, self.message)
    }
}

impl std::error::Error for StoreError {}

/// Minimal CRUD surface of the hosted document database.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every document in the collection. Order is whatever the
    /// backend yields and must not be relied on.
    async fn list(&self, collection: Collection) -> Result<Vec<RawDocument>, StoreError>;

    /// Insert one document and return its assigned identifier.
    async fn insert(
        &self,
        collection: Collection,
        data: Map<String, Value>,
    ) -> Result<String, StoreError>;
}
