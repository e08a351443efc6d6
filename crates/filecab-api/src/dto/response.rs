//! Response DTOs.

use serde::{Deserialize, Serialize};

use filecab_entity::file::model::File;
use filecab_entity::folder::model::Folder;

/// Standard success response wrapper for data-carrying endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Acknowledgment response for mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    /// Whether the request was successful.
    pub success: bool,
    /// Acknowledgment message.
    pub message: String,
}

impl AckResponse {
    /// Creates a successful acknowledgment.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Data payload of GET /v1/folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldersData {
    /// The folder records.
    pub folders: Vec<Folder>,
}

/// Data payload of GET /v1/files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesData {
    /// The file records.
    pub files: Vec<File>,
}

/// Data payload of GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Whether the document store answered a liveness probe.
    pub store: bool,
}
