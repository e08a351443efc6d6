//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use filecab_api::state::AppState;
use filecab_core::config::Configuration;
use filecab_core::config::logging::LoggingConfig;
use filecab_core::config::server::ServerConfig;
use filecab_core::config::store::StoreConfig;
use filecab_service::file::service::FileService;
use filecab_service::folder::service::FolderService;
use filecab_service::hierarchy::HierarchyValidator;
use filecab_store::provider::StoreManager;
use filecab_store::repositories::file::FileRepository;
use filecab_store::repositories::folder::FolderRepository;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub async fn new() -> Self {
        let config = Configuration {
            server: ServerConfig::default(),
            store: StoreConfig {
                provider: "memory".to_string(),
                ..StoreConfig::default()
            },
            logging: LoggingConfig::default(),
        };

        let store = StoreManager::connect(&config.store)
            .await
            .expect("Failed to init in-memory store");

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

        let state = AppState {
            config: Arc::new(config),
            store,
            folder_service,
            file_service,
        };

        Self {
            router: filecab_api::router::build_router(state),
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a root folder and return its id
    pub async fn create_root_folder(&self, name: &str) -> String {
        let response = self
            .request("POST", "/v1/folders", Some(serde_json::json!({"name": name})))
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Folder create failed: {:?}",
            response.body
        );
        self.folder_id_by_name(name).await
    }

    /// Look up a folder id by name via the list endpoint
    pub async fn folder_id_by_name(&self, name: &str) -> String {
        let response = self.request("GET", "/v1/folders", None).await;
        assert_eq!(response.status, StatusCode::OK);

        response.body["data"]["folders"]
            .as_array()
            .expect("No folders array")
            .iter()
            .find(|f| f["name"] == name)
            .and_then(|f| f["id"].as_str())
            .unwrap_or_else(|| panic!("No folder named '{name}'"))
            .to_string()
    }

    /// Look up a file id by name via the list endpoint
    pub async fn file_id_by_name(&self, name: &str) -> String {
        let response = self.request("GET", "/v1/files", None).await;
        assert_eq!(response.status, StatusCode::OK);

        response.body["data"]["files"]
            .as_array()
            .expect("No files array")
            .iter()
            .find(|f| f["name"] == name)
            .and_then(|f| f["id"].as_str())
            .unwrap_or_else(|| panic!("No file named '{name}'"))
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
