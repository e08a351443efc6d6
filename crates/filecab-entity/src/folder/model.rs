//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filecab_core::AppError;
use filecab_core::types::document::Document;
use filecab_core::types::id::FolderId;

use crate::level::Level;

/// A folder in the two-level hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Hierarchy level.
    pub level: Level,
    /// Parent folder ID (null for root folders).
    pub parent: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Data required to create a new folder.
///
/// Serializes to the persisted field layout. `parent` is always written,
/// explicitly null for root folders, so that null filters match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Hierarchy level.
    pub level: Level,
    /// Parent folder (None for root).
    pub parent: Option<FolderId>,
}

/// Persisted field layout shared by the conversion below.
#[derive(Debug, Deserialize)]
struct StoredFields {
    name: String,
    #[serde(default)]
    level: Level,
    #[serde(default)]
    parent: Option<FolderId>,
}

impl TryFrom<Document> for Folder {
    type Error = AppError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let fields: StoredFields = serde_json::from_value(doc.fields)?;
        Ok(Self {
            id: FolderId::from_uuid(doc.id),
            name: fields.name,
            level: fields.level,
            parent: fields.parent,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}
