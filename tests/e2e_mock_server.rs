//! E2E tests using the mock Cucumber Studio server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use serde_json::json;
use studioapi::mock_server::{
    Fixtures, MockServer, MockState, DEFAULT_PROJECT_ID, DEFAULT_ROOT_FOLDER_ID,
};
use studioapi::{
    Attributes, ClientOptions, CreateParams, Credentials, FolderScope, ProjectScope, ResourceId,
    ResourceType, ScenarioScope, StudioClient, StudioError, UpdateParams,
};
use tokio_test::{assert_err, assert_ok};

fn credentials() -> Credentials {
    Credentials::new("test-token", "test-client", "me@example.com")
}

fn client_for(server: &MockServer) -> StudioClient {
    StudioClient::new(
        credentials(),
        ClientOptions::default()
            .with_base_url(server.url())
            .with_project_id(DEFAULT_PROJECT_ID),
    )
    .unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Folder and Scenario Workflows
// =============================================================================

#[tokio::test]
async fn test_folder_scenario_lifecycle() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Top-level folder, no parent given
    let folder = client
        .create_folder(CreateParams::named("F"))
        .await
        .unwrap();
    assert_eq!(folder.resource_type, ResourceType::Folders);
    assert_eq!(folder.name(), Some("F"));

    // Folder id sent as a numeric attribute
    let scenario = client
        .create_scenario(CreateParams::named("S").in_folder(&folder.id))
        .await
        .unwrap();
    assert_eq!(scenario.resource_type, ResourceType::Scenarios);
    assert_eq!(scenario.folder_id(), Some(folder.id.clone()));
    assert_eq!(
        scenario.attribute("folder-id"),
        Some(&json!(folder.id.as_u64().unwrap()))
    );

    let inside = client
        .list_folder_scenarios(FolderScope::new(folder.id.clone()))
        .await
        .unwrap();
    assert_eq!(inside.len(), 1);
    assert_eq!(inside[0].id, scenario.id);

    let deleted = client
        .delete_scenario(ScenarioScope::new(scenario.id.clone()))
        .await
        .unwrap();
    assert_eq!(deleted, json!({}));

    let deleted = client
        .delete_folder(FolderScope::new(folder.id.clone()))
        .await
        .unwrap();
    assert_eq!(deleted, json!({}));

    let err = client
        .get_folder(FolderScope::new(folder.id))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_nested_folder_lifecycle() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let root = FolderScope::new(DEFAULT_ROOT_FOLDER_ID);

    let folder = client
        .create_folder(
            CreateParams::named("Payments")
                .with_parent(&ResourceId::from(DEFAULT_ROOT_FOLDER_ID)),
        )
        .await
        .unwrap();
    assert_eq!(folder.resource_type, ResourceType::Folders);
    assert_eq!(folder.folder_id(), Some(ResourceId::from(DEFAULT_ROOT_FOLDER_ID)));

    let children = client.list_child_folders(root.clone()).await.unwrap();
    assert!(children.iter().any(|c| c.id == folder.id));

    client
        .delete_folder(FolderScope::new(folder.id.clone()))
        .await
        .unwrap();

    let children = client.list_child_folders(root).await.unwrap();
    assert!(!children.iter().any(|c| c.id == folder.id));

    server.shutdown().await;
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let first = assert_ok!(client.list_scenarios(ProjectScope::default()).await);
    let second = assert_ok!(client.list_scenarios(ProjectScope::default()).await);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);

    server.shutdown().await;
}

#[tokio::test]
async fn test_created_scenario_round_trips() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let created = client
        .create_scenario(
            CreateParams::named("Apply coupon")
                .in_folder(&ResourceId::from(101u64))
                .with_attribute("description", "Ten percent off"),
        )
        .await
        .unwrap();

    let fetched = client
        .get_scenario(ScenarioScope::new(created.id.clone()))
        .await
        .unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.description(), Some("Ten percent off"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_scenario_then_read() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let updated = client
        .update_scenario(
            UpdateParams::new(200u64, Attributes::new()).with_attribute("name", "Add two items"),
        )
        .await
        .unwrap();
    assert_eq!(updated.name(), Some("Add two items"));

    let fetched = client
        .get_scenario(ScenarioScope::new(200u64))
        .await
        .unwrap();
    assert_eq!(fetched.name(), Some("Add two items"));
    // Untouched attributes survive
    assert_eq!(fetched.folder_id(), Some(ResourceId::from(101u64)));

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_folder_rename() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let updated = client
        .update_folder(UpdateParams::new(101u64, Attributes::new()).with_attribute("name", "Basket"))
        .await
        .unwrap();
    assert_eq!(updated.name(), Some("Basket"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_clear_folder_scenarios() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let cart = FolderScope::new(101u64);

    let before = client.list_folder_scenarios(cart.clone()).await.unwrap();
    assert_eq!(before.len(), 2);

    assert_ok!(client.clear_folder_scenarios(cart.clone()).await);

    let after = client.list_folder_scenarios(cart).await.unwrap();
    assert!(after.is_empty());

    // Other folders keep theirs
    let checkout = client
        .list_folder_scenarios(FolderScope::new(102u64))
        .await
        .unwrap();
    assert_eq!(checkout.len(), 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_deleted_folder_leaves_parent_children() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let root = FolderScope::new(DEFAULT_ROOT_FOLDER_ID);

    let children = client.list_child_folders(root.clone()).await.unwrap();
    assert_eq!(children.len(), 2);

    client
        .delete_folder(FolderScope::new(101u64))
        .await
        .unwrap();

    let children = client.list_child_folders(root).await.unwrap();
    assert!(!children.iter().any(|c| c.id == ResourceId::from(101u64)));
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name(), Some("Checkout"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_delete_child_folders() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let root = FolderScope::new(DEFAULT_ROOT_FOLDER_ID);

    let body = client.delete_child_folders(root.clone()).await.unwrap();
    assert_eq!(body, json!({}));

    assert!(client.list_child_folders(root).await.unwrap().is_empty());
    // Scenarios of removed folders go with them
    assert!(client
        .list_scenarios(ProjectScope::default())
        .await
        .unwrap()
        .is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_without_name_never_reaches_server() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = assert_err!(
        client
            .create_folder(CreateParams::new(Attributes::new()))
            .await
    );
    assert!(matches!(err, StudioError::Validation(_)));

    let folders = client.list_folders(ProjectScope::default()).await.unwrap();
    assert_eq!(folders.len(), 3);

    server.shutdown().await;
}

// =============================================================================
// Projects and Backups
// =============================================================================

#[tokio::test]
async fn test_find_project_then_use_it() {
    let server = MockServer::start().await;
    let mut client = client_for(&server);

    let id = client
        .find_project_id_by_name("Back office")
        .await
        .unwrap()
        .expect("project exists");
    assert_eq!(id, "2");

    client.set_project_id(Some(id));
    let folders = client.list_folders(ProjectScope::default()).await.unwrap();
    assert!(folders.is_empty());

    assert_eq!(client.find_project_id_by_name("Missing").await.unwrap(), None);

    server.shutdown().await;
}

#[tokio::test]
async fn test_duplicate_project_names_resolve_to_first() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let id = client.find_project_id_by_name("Webshop").await.unwrap();
    assert_eq!(id, Some(ResourceId::from(1u64)));

    server.shutdown().await;
}

#[tokio::test]
async fn test_backups() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let last = client
        .get_project_backup(ProjectScope::default())
        .await
        .unwrap();
    assert_eq!(last.name(), Some("Before release 1.1"));

    let all = client
        .list_project_backups(ProjectScope::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    // Project 2 has never been backed up
    let err = client
        .get_project_backup(ProjectScope::in_project(2u64))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_projects_are_isolated() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let created = client
        .create_folder(CreateParams::named("Reports").in_project(2u64))
        .await
        .unwrap();

    let err = client
        .get_folder(FolderScope::new(created.id.clone()))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    let found = client
        .get_folder(FolderScope::new(created.id).in_project(2u64))
        .await
        .unwrap();
    assert_eq!(found.name(), Some("Reports"));

    server.shutdown().await;
}

// =============================================================================
// Custom State and Authentication
// =============================================================================

#[tokio::test]
async fn test_custom_state() {
    let state = MockState::new()
        .with_project(Fixtures::project(42, "Custom"))
        .with_folder("42", Fixtures::folder(7, "Only", None));
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let folders = client
        .list_folders(ProjectScope::in_project(42u64))
        .await
        .unwrap();
    assert_eq!(folders.len(), 1);

    // Default project "1" does not exist here
    let err = client.get_project(ProjectScope::default()).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_state_is_visible_to_the_test() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    client
        .create_scenario(CreateParams::named("Tracked").in_folder(&ResourceId::from(102u64)))
        .await
        .unwrap();

    let state = server.state();
    let state = state.read().await;
    assert!(state
        .scenarios
        .values()
        .any(|s| s.resource.name() == Some("Tracked")));
}

#[tokio::test]
async fn test_wrong_credentials_are_unauthorized() {
    let state = MockServer::default_state().with_required_credentials(credentials());
    let server = MockServer::with_state(state).await;

    let good = client_for(&server);
    assert_ok!(good.list_projects().await);

    let bad = StudioClient::new(
        Credentials::new("other-token", "test-client", "me@example.com"),
        ClientOptions::default().with_base_url(server.url()),
    )
    .unwrap();

    let err = bad.list_projects().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(
        err.to_string(),
        "Cucumber Studio API error (401): You need to sign in or sign up before continuing."
    );

    server.shutdown().await;
}
