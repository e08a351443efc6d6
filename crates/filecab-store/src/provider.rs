//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use filecab_core::config::store::StoreConfig;
use filecab_core::error::AppError;
use filecab_core::result::AppResult;
use filecab_core::traits::store::DocumentStore;
use filecab_core::types::document::Document;
use filecab_core::types::filter::Filter;

/// Store manager that wraps the configured document store backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store backend.
    inner: Arc<dyn DocumentStore>,
}

impl StoreManager {
    /// Connect to the store backend named in configuration.
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn DocumentStore> = match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL document store");
                let store = crate::postgres::PostgresDocumentStore::connect(config).await?;
                Arc::new(store)
            }
            "memory" => {
                info!("Initializing in-memory document store");
                let store = crate::memory::MemoryDocumentStore::new();
                Arc::new(store)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: postgres, memory"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing backend (for testing).
    pub fn from_backend(backend: Arc<dyn DocumentStore>) -> Self {
        Self { inner: backend }
    }

    /// Get a reference to the inner backend.
    pub fn backend(&self) -> &dyn DocumentStore {
        self.inner.as_ref()
    }
}

#[async_trait]
impl DocumentStore for StoreManager {
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        self.inner.find_one(collection, filter).await
    }

    async fn find_many(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        self.inner.find_many(collection, filter).await
    }

    async fn insert_one(&self, collection: &str, fields: Value) -> AppResult<Document> {
        self.inner.insert_one(collection, fields).await
    }

    async fn update_one(&self, collection: &str, id: Uuid, changes: Value) -> AppResult<bool> {
        self.inner.update_one(collection, id, changes).await
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        self.inner.delete_many(collection, filter).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn close(&self) {
        self.inner.close().await;
    }
}
