//! SQLite-backed document store.
//!
//! Every collection lives in one `documents` table with the payload kept as
//! JSON text, which keeps the store as schemaless as the hosted one.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use super::{Collection, DocumentStore, RawDocument, StoreError};

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            data TEXT NOT NULL,
            inserted_at TEXT NOT NULL,
            UNIQUE (collection, id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection, seq);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Document store persisted in SQLite.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn list(&self, collection: Collection) -> Result<Vec<RawDocument>, StoreError> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = ? ORDER BY seq")
            .bind(collection.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::new(collection, format!("list failed: {}", e)))?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: String = row.get("id");
            let data: String = row.get("data");
            match serde_json::from_str::<Value>(&data) {
                Ok(Value::Object(data)) => documents.push(RawDocument { id, data }),
                Ok(_) => {
                    tracing::warn!(%collection, %id, "Skipping stored payload that is not a JSON object")
                }
                Err(e) => {
                    tracing::warn!(%collection, %id, error = %e, "Skipping stored payload with corrupt JSON")
                }
            }
        }

        Ok(documents)
    }

    async fn insert(
        &self,
        collection: Collection,
        data: Map<String, Value>,
    ) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let payload = Value::Object(data).to_string();

        sqlx::query("INSERT INTO documents (collection, id, data, inserted_at) VALUES (?, ?, ?, ?)")
            .bind(collection.as_str())
            .bind(&id)
            .bind(&payload)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::new(collection, format!("insert failed: {}", e)))?;

        tracing::debug!(%collection, %id, "Inserted document");
        Ok(id)
    }
}
