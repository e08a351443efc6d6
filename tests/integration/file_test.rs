//! Integration tests for file operations.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_list_delete_round_trip() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/v1/files", Some(json!({"name": "notes.txt"})))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "File successfully created.");

    let id = app.file_id_by_name("notes.txt").await;

    let response = app.request("DELETE", &format!("/v1/file/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "File successfully deleted");

    let response = app.request("GET", "/v1/files", None).await;
    assert!(response.body["data"]["files"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_root_file_rejected() {
    let app = TestApp::new().await;
    app.request("POST", "/v1/files", Some(json!({"name": "notes.txt"})))
        .await;

    let response = app
        .request("POST", "/v1/files", Some(json!({"name": "notes.txt"})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "A file with this name already exists in this directory"
    );
}

#[tokio::test]
async fn test_file_may_reuse_folder_name() {
    let app = TestApp::new().await;
    app.create_root_folder("shared").await;

    // Uniqueness is per kind; a file may carry a folder's name.
    let response = app
        .request("POST", "/v1/files", Some(json!({"name": "shared"})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_rename_file() {
    let app = TestApp::new().await;
    app.request("POST", "/v1/files", Some(json!({"name": "draft.txt"})))
        .await;
    let id = app.file_id_by_name("draft.txt").await;

    let response = app
        .request(
            "PUT",
            &format!("/v1/file/{id}"),
            Some(json!({"name": "final.txt"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "File successfully edited");
    assert_eq!(app.file_id_by_name("final.txt").await, id);
}

#[tokio::test]
async fn test_rename_missing_file() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            &format!("/v1/file/{}", Uuid::new_v4()),
            Some(json!({"name": "x"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Could not find file.");
}

#[tokio::test]
async fn test_delete_missing_file() {
    let app = TestApp::new().await;

    let response = app
        .request("DELETE", &format!("/v1/file/{}", Uuid::new_v4()), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Could not find file.");
}

#[tokio::test]
async fn test_malformed_file_id_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/v1/file/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_child_file_appears_in_folder_children() {
    let app = TestApp::new().await;
    let docs_id = app.create_root_folder("docs").await;

    let response = app
        .request(
            "POST",
            "/v1/files",
            Some(json!({"name": "readme.md", "level": "child", "parent": docs_id})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/v1/folder/{docs_id}"), None)
        .await;
    let files = response.body["data"]["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["name"], "readme.md");
    assert_eq!(files[0]["parent"], docs_id.as_str());
}

#[tokio::test]
async fn test_child_file_with_unresolvable_parent() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/files",
            Some(json!({
                "name": "orphan.txt",
                "level": "child",
                "parent": Uuid::new_v4().to_string()
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid parent ID provided.");
}
