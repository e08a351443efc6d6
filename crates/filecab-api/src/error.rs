//! Maps domain `AppError` to HTTP responses.
//!
//! Validation and not-found errors carry their message to the client;
//! everything else is reported generically and the underlying cause is
//! logged server-side only.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use filecab_core::error::{AppError, ErrorKind};

/// Client-facing error body for 400/404 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Human-readable error message.
    pub error: String,
}

/// Client-facing error body for 500 responses. The wire contract uses
/// `message` rather than `error` for server-side failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureBody {
    /// Always `false`.
    pub success: bool,
    /// Generic failure message; never carries store detail.
    pub message: String,
}

/// Wrapper that lets handlers return `AppError` via `?` while keeping the
/// response mapping in this crate.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        match err.kind {
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    success: false,
                    error: err.message,
                }),
            )
                .into_response(),
            ErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    success: false,
                    error: err.message,
                }),
            )
                .into_response(),
            _ => {
                tracing::error!(
                    kind = %err.kind,
                    error = %err.message,
                    source = ?err.source,
                    "Request failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FailureBody {
                        success: false,
                        message: err.message,
                    }),
                )
                    .into_response()
            }
        }
    }
}
