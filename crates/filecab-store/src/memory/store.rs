//! In-memory document store implementation using dashmap.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use filecab_core::result::AppResult;
use filecab_core::traits::store::DocumentStore;
use filecab_core::types::document::Document;
use filecab_core::types::filter::Filter;

/// In-memory document store keeping one insertion-ordered vector per
/// collection. Used for tests and local development without PostgreSQL.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    /// Collection name to stored documents, in insertion order.
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)).cloned()))
    }

    async fn find_many(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>> {
        Ok(self
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_one(&self, collection: &str, fields: Value) -> AppResult<Document> {
        let now = Utc::now();
        let doc = Document {
            id: Uuid::new_v4(),
            fields,
            created_at: now,
            updated_at: now,
        };

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());

        Ok(doc)
    }

    async fn update_one(&self, collection: &str, id: Uuid, changes: Value) -> AppResult<bool> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(false);
        };
        let Some(doc) = docs.iter_mut().find(|doc| doc.id == id) else {
            return Ok(false);
        };

        merge_fields(&mut doc.fields, changes);
        doc.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = docs.len();
        docs.retain(|doc| !filter.matches(doc));
        let count = (before - docs.len()) as u64;

        debug!(collection, count, "Deleted documents");
        Ok(count)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// Merge top-level members of `changes` into `fields`, overwriting
/// existing keys. Matches JSONB concatenation on the PostgreSQL side.
fn merge_fields(fields: &mut Value, changes: Value) {
    match (fields, changes) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, value) in incoming {
                existing.insert(key, value);
            }
        }
        (fields, changes) => *fields = changes,
    }
}
