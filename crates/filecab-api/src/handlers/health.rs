//! Health check handler.

use axum::Json;
use axum::extract::State;

use filecab_core::traits::store::DocumentStore;

use crate::dto::response::{ApiResponse, HealthData};
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let store = state.store.health_check().await.unwrap_or(false);

    Json(ApiResponse::ok(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store,
    }))
}
