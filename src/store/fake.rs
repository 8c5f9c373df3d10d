//! In-memory document store for tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use super::{Collection, DocumentStore, RawDocument, StoreError};

/// In-memory store with per-collection fault injection.
#[derive(Default)]
pub struct FakeStore {
    pub documents: Mutex<HashMap<Collection, Vec<RawDocument>>>,
    pub failing: Mutex<HashSet<Collection>>,
    pub list_calls: AtomicU64,
    pub insert_calls: AtomicU64,
    pub next_id: AtomicU64,
    pub read_delay: Option<Duration>,
}

impl FakeStore {
    pub fn with_read_delay(delay: Duration) -> Self {
        Self {
            read_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Seed a document under a fixed identifier.
    pub async fn put(&self, collection: Collection, id: &str, data: Value) {
        let data = match data {
            Value::Object(map) => map,
            other => panic!("fake store documents must be objects, got {other}"),
        };
        self.documents
            .lock()
            .await
            .entry(collection)
            .or_default()
            .push(RawDocument {
                id: id.to_string(),
                data,
            });
    }

    pub async fn fail(&self, collection: Collection) {
        self.failing.lock().await.insert(collection);
    }

    pub async fn documents_in(&self, collection: Collection) -> Vec<RawDocument> {
        self.documents
            .lock()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn list(&self, collection: Collection) -> Result<Vec<RawDocument>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.lock().await.contains(&collection) {
            return Err(StoreError::new(collection, "injected fault"));
        }
        Ok(self.documents_in(collection).await)
    }

    async fn insert(
        &self,
        collection: Collection,
        data: Map<String, Value>,
    ) -> Result<String, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);
        if self.failing.lock().await.contains(&collection) {
            return Err(StoreError::new(collection, "injected fault"));
        }
        let id = format!("doc-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.documents
            .lock()
            .await
            .entry(collection)
            .or_default()
            .push(RawDocument {
                id: id.clone(),
                data,
            });
        Ok(id)
    }
}
