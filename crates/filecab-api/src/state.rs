//! Application state shared across all handlers.

use std::sync::Arc;

use filecab_core::config::Configuration;
use filecab_service::file::service::FileService;
use filecab_service::folder::service::FolderService;
use filecab_store::provider::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or internally reference counted for cheap
/// cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Configuration>,
    /// Document store handle, used by the health check.
    pub store: StoreManager,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// File service.
    pub file_service: Arc<FileService>,
}
