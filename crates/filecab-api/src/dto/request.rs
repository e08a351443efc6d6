//! Request DTOs.
//!
//! Request shapes are plain typed structs with `Option` fields; required
//! and enum checks happen as explicit conditionals in the validator and
//! handlers, never through a runtime rule engine.

use serde::{Deserialize, Serialize};

use filecab_service::hierarchy::RecordDraft;

/// Body of POST /v1/folders and POST /v1/files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    /// Record name. Required; enforced by the validator.
    pub name: Option<String>,
    /// Hierarchy level, `"root"` or `"child"`. Defaults to root.
    pub level: Option<String>,
    /// Parent folder id. Required when level is `"child"`.
    pub parent: Option<String>,
}

impl From<CreateRecordRequest> for RecordDraft {
    fn from(req: CreateRecordRequest) -> Self {
        Self {
            name: req.name,
            level: req.level,
            parent: req.parent,
        }
    }
}

/// Body of PUT /v1/folder/{id} and PUT /v1/file/{id}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRequest {
    /// The new record name.
    pub name: Option<String>,
}

/// Query string of GET /v1/folders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFoldersQuery {
    /// Optional level filter, `"root"` or `"child"`.
    pub level: Option<String>,
}
