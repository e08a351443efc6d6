//! File entity model.
//!
//! Files store metadata only; no content is kept. A file's parent, when
//! present, always references a folder record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use filecab_core::AppError;
use filecab_core::types::document::Document;
use filecab_core::types::id::{FileId, FolderId};

use crate::level::Level;

/// A file metadata record in the two-level hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// File name.
    pub name: String,
    /// Hierarchy level.
    pub level: Level,
    /// Parent folder ID (null for root files).
    pub parent: Option<FolderId>,
    /// When the file record was created.
    pub created_at: DateTime<Utc>,
    /// When the file record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new file record.
///
/// Serializes to the persisted field layout. `parent` is always written,
/// explicitly null for root files, so that null filters match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// File name.
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

impl TryFrom<Document> for File {
    type Error = AppError;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let fields: StoredFields = serde_json::from_value(doc.fields)?;
        Ok(Self {
            id: FileId::from_uuid(doc.id),
            name: fields.name,
            level: fields.level,
            parent: fields.parent,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        })
    }
}
