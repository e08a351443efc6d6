//! Folder CRUD and children handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use filecab_core::error::AppError;
use filecab_core::types::id::FolderId;
use filecab_entity::level::Level;
use filecab_service::folder::service::FolderContents;

use crate::dto::request::{CreateRecordRequest, ListFoldersQuery, RenameRequest};
use crate::dto::response::{AckResponse, ApiResponse, FoldersData};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /v1/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state.folder_service.create_folder(&req.into()).await?;
    Ok(Json(AckResponse::ok("Folder successfully created.")))
}

/// GET /v1/folders?level=
pub async fn list_folders(
    State(state): State<AppState>,
    Query(query): Query<ListFoldersQuery>,
) -> Result<Json<ApiResponse<FoldersData>>, ApiError> {
    let level = query
        .level
        .as_deref()
        .map(str::parse::<Level>)
        .transpose()?;

    let folders = state.folder_service.list_folders(level).await?;
    Ok(Json(ApiResponse::ok(FoldersData { folders })))
}

/// GET /v1/folder/{folder_id}
pub async fn folder_children(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> Result<Json<ApiResponse<FolderContents>>, ApiError> {
    let folder_id = parse_folder_id(&folder_id)?;
    let contents = state.folder_service.list_children(folder_id).await?;
    Ok(Json(ApiResponse::ok(contents)))
}

/// PUT /v1/folder/{folder_id}
pub async fn rename_folder(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    let folder_id = parse_folder_id(&folder_id)?;
    let name = req
        .name
        .ok_or_else(|| AppError::validation("name is required"))?;

    state.folder_service.rename_folder(folder_id, &name).await?;
    Ok(Json(AckResponse::ok("Folder updated successfully")))
}

/// DELETE /v1/folder/{folder_id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(folder_id): Path<String>,
) -> Result<Json<AckResponse>, ApiError> {
    let folder_id = parse_folder_id(&folder_id)?;
    state.folder_service.delete_folder(folder_id).await?;
    Ok(Json(AckResponse::ok("Folder successfully deleted")))
}

/// Path ids that do not parse cannot resolve to an existing folder, so they
/// report as not found rather than as a server error.
fn parse_folder_id(raw: &str) -> Result<FolderId, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found("Could not find folder."))
}
