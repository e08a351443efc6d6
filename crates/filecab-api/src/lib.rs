//! # filecab-api
//!
//! HTTP API layer for FileCab built on Axum.
//!
//! Provides the `/v1` REST endpoints, the health check, response DTOs, and
//! the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
