//! Integration tests for folder operations.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_root_folder() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/v1/folders", Some(json!({"name": "docs"})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Folder successfully created.");
}

#[tokio::test]
async fn test_duplicate_root_folder_rejected() {
    let app = TestApp::new().await;
    app.create_root_folder("docs").await;

    let response = app
        .request("POST", "/v1/folders", Some(json!({"name": "docs"})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(
        response.body["error"],
        "A folder with this name already exists in this directory"
    );
}

#[tokio::test]
async fn test_create_folder_requires_name() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/v1/folders", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Resource name is required.");
}

#[tokio::test]
async fn test_create_folder_rejects_bad_level() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/folders",
            Some(json!({"name": "docs", "level": "deep"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "level can only be root or child");
}

#[tokio::test]
async fn test_create_child_requires_parent() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/folders",
            Some(json!({"name": "sub", "level": "child"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Parent ID must be provided");
}

#[tokio::test]
async fn test_create_child_with_unresolvable_parent() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/v1/folders",
            Some(json!({"name": "sub", "level": "child", "parent": Uuid::new_v4().to_string()})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid parent ID provided.");
}

#[tokio::test]
async fn test_children_listing_flow() {
    let app = TestApp::new().await;
    let docs_id = app.create_root_folder("docs").await;

    let response = app
        .request(
            "POST",
            "/v1/folders",
            Some(json!({"name": "sub", "level": "child", "parent": docs_id})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/v1/folder/{docs_id}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let folders = response.body["data"]["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "sub");
    assert!(response.body["data"]["files"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_children_of_missing_folder() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", &format!("/v1/folder/{}", Uuid::new_v4()), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Could not find folder.");
}

#[tokio::test]
async fn test_same_name_under_different_parents() {
    let app = TestApp::new().await;
    let parent_a = app.create_root_folder("a").await;
    let parent_b = app.create_root_folder("b").await;

    for parent in [&parent_a, &parent_b] {
        let response = app
            .request(
                "POST",
                "/v1/folders",
                Some(json!({"name": "q3", "level": "child", "parent": parent})),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    }
}

#[tokio::test]
async fn test_list_folders_level_filter() {
    let app = TestApp::new().await;
    let top_id = app.create_root_folder("top").await;
    app.request(
        "POST",
        "/v1/folders",
        Some(json!({"name": "sub", "level": "child", "parent": top_id})),
    )
    .await;

    let response = app.request("GET", "/v1/folders?level=root", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let folders = response.body["data"]["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "top");

    let response = app.request("GET", "/v1/folders", None).await;
    assert_eq!(response.body["data"]["folders"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_folders_rejects_bad_level() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/v1/folders?level=bogus", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "level can only be root or child");
}

#[tokio::test]
async fn test_rename_folder() {
    let app = TestApp::new().await;
    let id = app.create_root_folder("old").await;

    let response = app
        .request(
            "PUT",
            &format!("/v1/folder/{id}"),
            Some(json!({"name": "new"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Folder updated successfully");
    assert_eq!(app.folder_id_by_name("new").await, id);
}

#[tokio::test]
async fn test_rename_missing_folder() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            &format!("/v1/folder/{}", Uuid::new_v4()),
            Some(json!({"name": "new"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Could not find folder.");
}

#[tokio::test]
async fn test_rename_onto_sibling_name_succeeds() {
    let app = TestApp::new().await;
    let a_id = app.create_root_folder("a").await;
    app.create_root_folder("b").await;

    // Rename is not re-validated against siblings; duplicates result.
    let response = app
        .request(
            "PUT",
            &format!("/v1/folder/{a_id}"),
            Some(json!({"name": "b"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/v1/folders", None).await;
    let named_b = response.body["data"]["folders"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["name"] == "b")
        .count();
    assert_eq!(named_b, 2);
}

#[tokio::test]
async fn test_delete_cascades_one_level_only() {
    let app = TestApp::new().await;
    let top_id = app.create_root_folder("top").await;
    app.request(
        "POST",
        "/v1/folders",
        Some(json!({"name": "sub", "level": "child", "parent": top_id})),
    )
    .await;
    let sub_id = app.folder_id_by_name("sub").await;
    app.request(
        "POST",
        "/v1/folders",
        Some(json!({"name": "deep", "level": "child", "parent": sub_id})),
    )
    .await;
    for name in ["one.txt", "two.txt"] {
        app.request(
            "POST",
            "/v1/files",
            Some(json!({"name": name, "level": "child", "parent": top_id})),
        )
        .await;
    }

    let response = app
        .request("DELETE", &format!("/v1/folder/{top_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Folder successfully deleted");

    // The folder, its child folder, and its two files are gone; the
    // grandchild survives with a dangling parent reference.
    let response = app.request("GET", "/v1/folders", None).await;
    let folders = response.body["data"]["folders"].as_array().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0]["name"], "deep");
    assert_eq!(folders[0]["parent"], sub_id.as_str());

    let response = app.request("GET", "/v1/files", None).await;
    assert!(response.body["data"]["files"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_folder() {
    let app = TestApp::new().await;

    let response = app
        .request("DELETE", &format!("/v1/folder/{}", Uuid::new_v4()), None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Could not find folder.");
}

#[tokio::test]
async fn test_malformed_folder_id_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/v1/folder/not-a-uuid", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Could not find folder.");
}
