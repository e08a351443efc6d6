//! File metadata CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};

use filecab_core::error::AppError;
use filecab_core::types::id::FileId;

use crate::dto::request::{CreateRecordRequest, RenameRequest};
use crate::dto::response::{AckResponse, ApiResponse, FilesData};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /v1/files
pub async fn create_file(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state.file_service.create_file(&req.into()).await?;
    Ok(Json(AckResponse::ok("File successfully created.")))
}

/// GET /v1/files
pub async fn list_files(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FilesData>>, ApiError> {
    let files = state.file_service.list_files().await?;
    Ok(Json(ApiResponse::ok(FilesData { files })))
}

/// PUT /v1/file/{file_id}
pub async fn rename_file(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    let file_id = parse_file_id(&file_id)?;
    let name = req
        .name
        .ok_or_else(|| AppError::validation("name is required"))?;

    state.file_service.rename_file(file_id, &name).await?;
    Ok(Json(AckResponse::ok("File successfully edited")))
}

/// DELETE /v1/file/{file_id}
pub async fn delete_file(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Result<Json<AckResponse>, ApiError> {
    let file_id = parse_file_id(&file_id)?;
    state.file_service.delete_file(file_id).await?;
    Ok(Json(AckResponse::ok("File successfully deleted")))
}

/// Path ids that do not parse cannot resolve to an existing file, so they
/// report as not found rather than as a server error.
fn parse_file_id(raw: &str) -> Result<FileId, AppError> {
    raw.parse()
        .map_err(|_| AppError::not_found("Could not find file."))
}
