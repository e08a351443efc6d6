//! Route definitions for the FileCab HTTP API.
//!
//! All routes are organized by domain and mounted under `/v1`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use filecab_core::config::server::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let v1_routes = Router::new().merge(folder_routes()).merge(file_routes());

    let cors = build_cors_layer(&state.config.server.cors);
    let body_limit = state.config.server.body_limit_bytes;

    Router::new()
        .nest("/v1", v1_routes)
        .route("/health", get(handlers::health::health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Folder endpoints: create, list, children, rename, cascade delete.
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folder/{folder_id}", get(handlers::folder::folder_children))
        .route("/folder/{folder_id}", put(handlers::folder::rename_folder))
        .route(
            "/folder/{folder_id}",
            delete(handlers::folder::delete_folder),
        )
}

/// File endpoints: create, list, rename, delete.
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::file::create_file))
        .route("/files", get(handlers::file::list_files))
        .route("/file/{file_id}", put(handlers::file::rename_file))
        .route("/file/{file_id}", delete(handlers::file::delete_file))
}

/// Builds a CORS tower layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    if config.allowed_headers.contains(&"*".to_string()) {
        layer = layer.allow_headers(Any);
    }

    layer.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
