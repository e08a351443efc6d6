//! Document store trait for pluggable persistence backends.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::document::Document;
use crate::types::filter::Filter;

/// Trait for document store backends (PostgreSQL or in-memory).
///
/// Documents live in named collections. The store assigns ids and
/// timestamps on insert; queries select documents by equality filters.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find the first document in a collection matching the filter.
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>>;

    /// Find all documents in a collection matching the filter, ordered by
    /// creation time.
    async fn find_many(&self, collection: &str, filter: &Filter) -> AppResult<Vec<Document>>;

    /// Insert a document. The store assigns the id and timestamps and
    /// returns the complete stored document.
    async fn insert_one(&self, collection: &str, fields: Value) -> AppResult<Document>;

    /// Merge `changes` into the fields of the document with the given id and
    /// bump its update timestamp. Returns `false` if no document matched.
    async fn update_one(&self, collection: &str, id: Uuid, changes: Value) -> AppResult<bool>;

    /// Delete all documents in a collection matching the filter. Returns the
    /// number of documents removed.
    async fn delete_many(&self, collection: &str, filter: &Filter) -> AppResult<u64>;

    /// Check that the store backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Release any backend resources. The default is a no-op.
    async fn close(&self) {}
}
