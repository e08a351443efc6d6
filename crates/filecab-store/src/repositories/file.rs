//! File repository implementation.

use serde_json::json;

use filecab_core::result::AppResult;
use filecab_core::traits::store::DocumentStore;
use filecab_core::types::filter::Filter;
use filecab_core::types::id::{FileId, FolderId};
use filecab_entity::file::model::{CreateFile, File};
use filecab_entity::level::Level;

use crate::provider::StoreManager;

const COLLECTION: &str = "files";

/// Repository for file metadata CRUD and hierarchy queries.
#[derive(Debug, Clone)]
pub struct FileRepository {
    store: StoreManager,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(store: StoreManager) -> Self {
        Self { store }
    }

    /// Find a file by ID.
    pub async fn find_by_id(&self, id: FileId) -> AppResult<Option<File>> {
        self.store
            .find_one(COLLECTION, &Filter::by_id(id.into_uuid()))
            .await?
            .map(File::try_from)
            .transpose()
    }

    /// List all files in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<File>> {
        let docs = self.store.find_many(COLLECTION, &Filter::new()).await?;
        docs.into_iter().map(File::try_from).collect()
    }

    /// List all files at the given hierarchy level.
    pub async fn find_by_level(&self, level: Level) -> AppResult<Vec<File>> {
        let filter = Filter::new().eq("level", level.as_str());
        let docs = self.store.find_many(COLLECTION, &filter).await?;
        docs.into_iter().map(File::try_from).collect()
    }

    /// List files directly inside a folder.
    pub async fn find_children(&self, parent: FolderId) -> AppResult<Vec<File>> {
        let filter = Filter::new().eq("parent", parent.to_string());
        let docs = self.store.find_many(COLLECTION, &filter).await?;
        docs.into_iter().map(File::try_from).collect()
    }

    /// Find a file with the given name in the same directory. Root lookups
    /// probe by name and level only; child lookups also match the parent.
    pub async fn find_sibling(
        &self,
        name: &str,
        level: Level,
        parent: Option<FolderId>,
    ) -> AppResult<Option<File>> {
        let mut filter = Filter::new().eq("name", name).eq("level", level.as_str());
        if let Some(parent) = parent {
            filter = filter.eq("parent", parent.to_string());
        }

        self.store
            .find_one(COLLECTION, &filter)
            .await?
            .map(File::try_from)
            .transpose()
    }

    /// Create a new file record.
    pub async fn create(&self, data: &CreateFile) -> AppResult<File> {
        let fields = serde_json::to_value(data)?;
        let doc = self.store.insert_one(COLLECTION, fields).await?;
        File::try_from(doc)
    }

    /// Rename a file. Returns `false` if the file does not exist.
    pub async fn rename(&self, id: FileId, name: &str) -> AppResult<bool> {
        self.store
            .update_one(COLLECTION, id.into_uuid(), json!({ "name": name }))
            .await
    }

    /// Delete a file record. Returns `false` if the file did not exist.
    pub async fn delete_by_id(&self, id: FileId) -> AppResult<bool> {
        let removed = self
            .store
            .delete_many(COLLECTION, &Filter::by_id(id.into_uuid()))
            .await?;
        Ok(removed > 0)
    }

    /// Delete all files directly inside a folder. Returns the number of
    /// files removed.
    pub async fn delete_children(&self, parent: FolderId) -> AppResult<u64> {
        let filter = Filter::new().eq("parent", parent.to_string());
        self.store.delete_many(COLLECTION, &filter).await
    }
}
