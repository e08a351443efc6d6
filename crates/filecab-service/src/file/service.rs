//! File metadata CRUD operations.

use std::sync::Arc;

use tracing::info;

use filecab_core::error::AppError;
use filecab_core::result::AppResult;
use filecab_core::types::id::FileId;
use filecab_entity::file::model::{CreateFile, File};
use filecab_entity::kind::RecordKind;
use filecab_store::repositories::file::FileRepository;

use crate::hierarchy::{HierarchyValidator, RecordDraft};

/// Manages file metadata CRUD operations.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Pre-mutation structural validator.
    validator: Arc<HierarchyValidator>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(file_repo: Arc<FileRepository>, validator: Arc<HierarchyValidator>) -> Self {
        Self {
            file_repo,
            validator,
        }
    }

    /// Creates a new file record after structural validation.
    pub async fn create_file(&self, draft: &RecordDraft) -> AppResult<File> {
        let record = self
            .validator
            .validate_create(RecordKind::File, draft)
            .await?;

        let file = self
            .file_repo
            .create(&CreateFile {
                name: record.name,
                level: record.level,
                parent: record.parent,
            })
            .await?;

        info!(
            file_id = %file.id,
            name = %file.name,
            level = %file.level,
            "File created"
        );

        Ok(file)
    }

    /// Lists all file records.
    pub async fn list_files(&self) -> AppResult<Vec<File>> {
        self.file_repo.find_all().await
    }

    /// Renames a file. Sibling uniqueness is not re-checked.
    pub async fn rename_file(&self, file_id: FileId, new_name: &str) -> AppResult<()> {
        if new_name.is_empty() {
            return Err(AppError::validation("name is required"));
        }

        self.file_repo
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("Could not find file."))?;

        self.file_repo.rename(file_id, new_name).await?;

        info!(file_id = %file_id, new_name = %new_name, "File renamed");
        Ok(())
    }

    /// Deletes a single file record.
    pub async fn delete_file(&self, file_id: FileId) -> AppResult<()> {
        self.file_repo
            .find_by_id(file_id)
            .await?
            .ok_or_else(|| AppError::not_found("Could not find file."))?;

        self.file_repo.delete_by_id(file_id).await?;

        info!(file_id = %file_id, "File deleted");
        Ok(())
    }
}
