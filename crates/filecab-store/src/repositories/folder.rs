//! Folder repository implementation.

use serde_json::json;

use filecab_core::result::AppResult;
use filecab_core::traits::store::DocumentStore;
use filecab_core::types::filter::Filter;
use filecab_core::types::id::FolderId;
use filecab_entity::folder::model::{CreateFolder, Folder};
use filecab_entity::level::Level;

use crate::provider::StoreManager;

const COLLECTION: &str = "folders";

/// Repository for folder CRUD and hierarchy queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    store: StoreManager,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(store: StoreManager) -> Self {
        Self { store }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        self.store
            .find_one(COLLECTION, &Filter::by_id(id.into_uuid()))
            .await?
            .map(Folder::try_from)
            .transpose()
    }

    /// List all folders in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<Folder>> {
        let docs = self.store.find_many(COLLECTION, &Filter::new()).await?;
        docs.into_iter().map(Folder::try_from).collect()
    }

    /// List all folders at the given hierarchy level.
    pub async fn find_by_level(&self, level: Level) -> AppResult<Vec<Folder>> {
        let filter = Filter::new().eq("level", level.as_str());
        let docs = self.store.find_many(COLLECTION, &filter).await?;
        docs.into_iter().map(Folder::try_from).collect()
    }

    /// List direct child folders of a parent folder.
    pub async fn find_children(&self, parent: FolderId) -> AppResult<Vec<Folder>> {
        let filter = Filter::new().eq("parent", parent.to_string());
        let docs = self.store.find_many(COLLECTION, &filter).await?;
        docs.into_iter().map(Folder::try_from).collect()
    }

    /// Find a folder with the given name in the same directory. Root
    /// lookups probe by name and level only; child lookups also match the
    /// parent.
    pub async fn find_sibling(
        &self,
        name: &str,
        level: Level,
        parent: Option<FolderId>,
    ) -> AppResult<Option<Folder>> {
        let mut filter = Filter::new().eq("name", name).eq("level", level.as_str());
        if let Some(parent) = parent {
            filter = filter.eq("parent", parent.to_string());
        }

        self.store
            .find_one(COLLECTION, &filter)
            .await?
            .map(Folder::try_from)
            .transpose()
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let fields = serde_json::to_value(data)?;
        let doc = self.store.insert_one(COLLECTION, fields).await?;
        Folder::try_from(doc)
    }

    /// Rename a folder. Returns `false` if the folder does not exist.
    pub async fn rename(&self, id: FolderId, name: &str) -> AppResult<bool> {
        self.store
            .update_one(COLLECTION, id.into_uuid(), json!({ "name": name }))
            .await
    }

    /// Delete a folder record. Returns `false` if the folder did not exist.
    pub async fn delete_by_id(&self, id: FolderId) -> AppResult<bool> {
        let removed = self
            .store
            .delete_many(COLLECTION, &Filter::by_id(id.into_uuid()))
            .await?;
        Ok(removed > 0)
    }

    /// Delete all direct child folders of a parent. Returns the number of
    /// folders removed.
    pub async fn delete_children(&self, parent: FolderId) -> AppResult<u64> {
        let filter = Filter::new().eq("parent", parent.to_string());
        self.store.delete_many(COLLECTION, &filter).await
    }
}
