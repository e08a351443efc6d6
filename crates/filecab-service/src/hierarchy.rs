//! Hierarchy consistency validation.
//!
//! Every create mutation passes through [`HierarchyValidator`] before any
//! insert: name presence, level membership, parent presence and existence,
//! and per-directory name uniqueness are checked in that order. Rename and
//! delete paths do not revalidate.

use std::sync::Arc;

use filecab_core::error::AppError;
use filecab_core::result::AppResult;
use filecab_core::types::id::FolderId;
use filecab_entity::kind::RecordKind;
use filecab_entity::level::Level;
use filecab_store::repositories::file::FileRepository;
use filecab_store::repositories::folder::FolderRepository;

/// Raw creation input as received from the client, before validation.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RecordDraft {
    /// Requested record name.
    pub name: Option<String>,
    /// Requested hierarchy level (`"root"` or `"child"`).
    pub level: Option<String>,
    /// Parent folder id, as an unparsed string.
    pub parent: Option<String>,
}

/// A structurally legal creation payload produced by the validator.
#[derive(Debug, Clone)]
pub struct NewRecord {
    /// Validated record name.
    pub name: String,
    /// Resolved hierarchy level.
    pub level: Level,
    /// Resolved parent folder (None for root records, even when the draft
    /// carried a parent).
    pub parent: Option<FolderId>,
}

/// Decides, before a mutation, whether it is structurally legal.
#[derive(Debug, Clone)]
pub struct HierarchyValidator {
    /// Folder repository, used for parent resolution and folder probes.
    folder_repo: Arc<FolderRepository>,
    /// File repository, used for file sibling probes.
    file_repo: Arc<FileRepository>,
}

impl HierarchyValidator {
    /// Creates a new hierarchy validator.
    pub fn new(folder_repo: Arc<FolderRepository>, file_repo: Arc<FileRepository>) -> Self {
        Self {
            folder_repo,
            file_repo,
        }
    }

    /// Validate a creation draft and produce the normalized payload.
    ///
    /// Checks run in a fixed order so the first failure wins: name, level,
    /// parent presence, parent existence, sibling uniqueness. A parent
    /// supplied alongside level=root is ignored rather than stored.
    pub async fn validate_create(
        &self,
        kind: RecordKind,
        draft: &RecordDraft,
    ) -> AppResult<NewRecord> {
        let name = match draft.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Err(AppError::validation("Resource name is required.")),
        };

        let level = match draft.level.as_deref() {
            Some(raw) => raw.parse()?,
            None => Level::default(),
        };

        let parent = match level {
            Level::Root => None,
            Level::Child => Some(self.resolve_parent(draft.parent.as_deref()).await?),
        };

        if self.has_sibling(kind, &name, level, parent).await? {
            return Err(AppError::validation(format!(
                "A {kind} with this name already exists in this directory"
            )));
        }

        Ok(NewRecord {
            name,
            level,
            parent,
        })
    }

    /// Resolve and verify a child record's parent folder id.
    async fn resolve_parent(&self, parent: Option<&str>) -> AppResult<FolderId> {
        let raw = match parent {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(AppError::validation("Parent ID must be provided")),
        };

        // Unparseable and unresolvable ids report the same way.
        let parent_id = raw
            .parse::<FolderId>()
            .map_err(|_| AppError::validation("Invalid parent ID provided."))?;

        self.folder_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| AppError::validation("Invalid parent ID provided."))?;

        Ok(parent_id)
    }

    /// Whether a record of the same kind already uses this name in the same
    /// directory scope.
    async fn has_sibling(
        &self,
        kind: RecordKind,
        name: &str,
        level: Level,
        parent: Option<FolderId>,
    ) -> AppResult<bool> {
        let existing = match kind {
            RecordKind::Folder => self
                .folder_repo
                .find_sibling(name, level, parent)
                .await?
                .is_some(),
            RecordKind::File => self
                .file_repo
                .find_sibling(name, level, parent)
                .await?
                .is_some(),
        };

        Ok(existing)
    }
}
