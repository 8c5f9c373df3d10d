//! Startup seeding of empty collections from a JSON file.
//!
//! The file maps collection names to arrays of documents:
//! `{ "services": [ { "title": "…", "description": "…" } ] }`.
//! Collections that already hold documents are left untouched.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};

use super::{Collection, DocumentStore};
use crate::errors::AppError;

/// Load the seed file at `path` into the store. Returns the number of inserted documents.
pub async fn seed_from_file(store: &dyn DocumentStore, path: &Path) -> Result<usize, AppError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::Config(format!("Failed to read seed file {}: {}", path.display(), e))
    })?;
    seed_from_str(store, &raw).await
}

pub async fn seed_from_str(store: &dyn DocumentStore, raw: &str) -> Result<usize, AppError> {
    let seed: BTreeMap<String, Vec<Map<String, Value>>> = serde_json::from_str(raw)
        .map_err(|e| AppError::Config(format!("Invalid seed file: {}", e)))?;

    let mut inserted = 0;
    for (name, documents) in seed {
        let collection = Collection::parse(&name)
            .ok_or_else(|| AppError::Config(format!("Unknown collection in seed file: {}", name)))?;

        if !store.list(collection).await?.is_empty() {
            tracing::info!(%collection, "Collection already populated, skipping seed");
            continue;
        }

        let count = documents.len();
        for document in documents {
            store.insert(collection, document).await?;
        }
        tracing::info!(%collection, count, "Seeded collection");
        inserted += count;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fake::FakeStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_seeds_only_empty_collections() {
        let store = FakeStore::default();
        store
            .put(
                Collection::Services,
                "existing",
                json!({ "title": "Existing", "description": "Kept" }),
            )
            .await;

        let raw = json!({
            "services": [{ "title": "New", "description": "Ignored" }],
            "home_hero": [
                { "url": "a.jpg", "title": "A", "createdAt": 1 },
                { "url": "b.jpg", "title": "B", "createdAt": 2 }
            ]
        })
        .to_string();

        let inserted = seed_from_str(&store, &raw).await.unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.documents_in(Collection::Services).await.len(), 1);
        assert_eq!(store.documents_in(Collection::HomeHero).await.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_collection_is_rejected() {
        let store = FakeStore::default();
        let err = seed_from_str(&store, r#"{ "topics": [] }"#).await.unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_missing_file_is_a_config_error() {
        let store = FakeStore::default();
        let err = seed_from_file(&store, Path::new("/nonexistent/seed.json"))
            .await
            .unwrap_err();
        assert!(err.message().contains("/nonexistent/seed.json"));
    }
}
