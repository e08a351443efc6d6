//! Folder CRUD operations with cascading delete.

use std::sync::Arc;

use tracing::info;

use filecab_core::error::AppError;
use filecab_core::result::AppResult;
use filecab_core::types::id::FolderId;
use filecab_entity::folder::model::{CreateFolder, Folder};
use filecab_entity::kind::RecordKind;
use filecab_entity::level::Level;
use filecab_store::repositories::file::FileRepository;
use filecab_store::repositories::folder::FolderRepository;

use crate::hierarchy::{HierarchyValidator, RecordDraft};

/// Direct children of a folder, both kinds.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FolderContents {
    /// Files directly inside the folder.
    pub files: Vec<filecab_entity::file::model::File>,
    /// Folders directly inside the folder.
    pub folders: Vec<Folder>,
}

/// Manages folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// File repository, needed for children listing and cascade deletes.
    file_repo: Arc<FileRepository>,
    /// Pre-mutation structural validator.
    validator: Arc<HierarchyValidator>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(
        folder_repo: Arc<FolderRepository>,
        file_repo: Arc<FileRepository>,
        validator: Arc<HierarchyValidator>,
    ) -> Self {
        Self {
            folder_repo,
            file_repo,
            validator,
        }
    }

    /// Creates a new folder after structural validation.
    pub async fn create_folder(&self, draft: &RecordDraft) -> AppResult<Folder> {
        let record = self
            .validator
            .validate_create(RecordKind::Folder, draft)
            .await?;

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                name: record.name,
                level: record.level,
                parent: record.parent,
            })
            .await?;

        info!(
            folder_id = %folder.id,
            name = %folder.name,
            level = %folder.level,
            "Folder created"
        );

        Ok(folder)
    }

    /// Lists folders, optionally restricted to one hierarchy level.
    pub async fn list_folders(&self, level: Option<Level>) -> AppResult<Vec<Folder>> {
        match level {
            Some(level) => self.folder_repo.find_by_level(level).await,
            None => self.folder_repo.find_all().await,
        }
    }

    /// Lists the direct children of a folder, both kinds.
    pub async fn list_children(&self, folder_id: FolderId) -> AppResult<FolderContents> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Could not find folder."))?;

        let (files, folders) = tokio::try_join!(
            self.file_repo.find_children(folder_id),
            self.folder_repo.find_children(folder_id),
        )?;

        Ok(FolderContents { files, folders })
    }

    /// Renames a folder. Sibling uniqueness is not re-checked.
    pub async fn rename_folder(&self, folder_id: FolderId, new_name: &str) -> AppResult<()> {
        if new_name.is_empty() {
            return Err(AppError::validation("name is required"));
        }

        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Could not find folder."))?;

        self.folder_repo.rename(folder_id, new_name).await?;

        info!(folder_id = %folder_id, new_name = %new_name, "Folder renamed");
        Ok(())
    }

    /// Deletes a folder and its direct children of both kinds.
    ///
    /// The two child sub-deletes run concurrently and are not transactional
    /// with each other or with the folder's own removal; one failing leaves
    /// whatever the other already removed. Grandchildren are not touched.
    pub async fn delete_folder(&self, folder_id: FolderId) -> AppResult<()> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Could not find folder."))?;

        let (files_removed, folders_removed) = tokio::try_join!(
            self.file_repo.delete_children(folder_id),
            self.folder_repo.delete_children(folder_id),
        )?;

        self.folder_repo.delete_by_id(folder_id).await?;

        info!(
            folder_id = %folder_id,
            files_removed,
            folders_removed,
            "Folder deleted"
        );

        Ok(())
    }
}
