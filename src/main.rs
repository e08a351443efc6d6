//! FileCab Server — file/folder metadata CRUD service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use filecab_api::state::AppState;
use filecab_core::config::Configuration;
use filecab_core::error::AppError;
use filecab_core::traits::store::DocumentStore;
use filecab_service::file::service::FileService;
use filecab_service::folder::service::FolderService;
use filecab_service::hierarchy::HierarchyValidator;
use filecab_store::provider::StoreManager;
use filecab_store::repositories::file::FileRepository;
use filecab_store::repositories::folder::FolderRepository;

#[tokio::main]
async fn main() {
    let env = std::env::var("FILECAB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match Configuration::load(&env) {
        Ok(c) => c,
        Err(e) => {
            // Logging is not up yet; report on stderr and bail.
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &Configuration) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: Configuration) -> Result<(), AppError> {
    tracing::info!("Starting FileCab v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Document store connection ────────────────────────
    tracing::info!(
        "Connecting to document store (provider: {})...",
        config.store.provider
    );
    let store = StoreManager::connect(&config.store).await?;
    tracing::info!("Document store ready");

    // ── Step 2: Repositories and services ────────────────────────
    let folder_repo = Arc::new(FolderRepository::new(store.clone()));
    let file_repo = Arc::new(FileRepository::new(store.clone()));
    let validator = Arc::new(HierarchyValidator::new(
        Arc::clone(&folder_repo),
        Arc::clone(&file_repo),
    ));
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&file_repo),
        Arc::clone(&validator),
    ));
    let file_service = Arc::new(FileService::new(Arc::clone(&file_repo), validator));

    // ── Step 3: Build and start HTTP server ──────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        store: store.clone(),
        folder_service,
        file_service,
    };

    let app = filecab_api::router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("FileCab server listening on {addr}");

    // ── Step 4: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    store.close().await;
    tracing::info!("FileCab server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
