//! Scenario endpoint tests against wiremock.

use futures::future::join_all;
use serde_json::json;
use studioapi::{
    Attributes, ClientOptions, CreateParams, Credentials, ProjectScope, ResourceId,
    ScenarioScope, StudioClient, StudioError, UpdateParams,
};
use wiremock::matchers::{any, body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> StudioClient {
    StudioClient::new(
        Credentials::new("test-token", "test-client", "me@example.com"),
        ClientOptions::default()
            .with_base_url(server.uri())
            .with_project_id("1"),
    )
    .unwrap()
}

fn scenario(id: &str, name: &str, folder: u64) -> serde_json::Value {
    json!({"type": "scenarios", "id": id, "attributes": {"name": name, "folder-id": folder}})
}

#[tokio::test]
async fn test_list_scenarios() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1/scenarios"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [scenario("200", "Add item", 101), scenario("201", "Remove item", 101)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scenarios = client(&mock_server)
        .list_scenarios(ProjectScope::default())
        .await
        .unwrap();

    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[1].name(), Some("Remove item"));
}

#[tokio::test]
async fn test_list_scenarios_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/4/scenarios"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&mock_server)
        .await;

    let scenarios = client(&mock_server)
        .list_scenarios(ProjectScope::in_project(4u64))
        .await
        .unwrap();
    assert!(scenarios.is_empty());
}

#[tokio::test]
async fn test_get_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/1/scenarios/200"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": scenario("200", "Add item", 101)})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let scenario = client(&mock_server)
        .get_scenario(ScenarioScope::new(200u64))
        .await
        .unwrap();

    assert_eq!(scenario.folder_id(), Some(ResourceId::from(101u64)));
}

#[tokio::test]
async fn test_create_scenario_in_folder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/1/scenarios"))
        .and(body_json(json!({
            "data": {"attributes": {"name": "Pay by card", "folder-id": 102, "description": "Happy path"}}
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": scenario("1000", "Pay by card", 102)})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client(&mock_server)
        .create_scenario(
            CreateParams::named("Pay by card")
                .in_folder(&ResourceId::from("102"))
                .with_attribute("description", "Happy path"),
        )
        .await
        .unwrap();

    assert_eq!(created.id, "1000");
    assert_eq!(created.name(), Some("Pay by card"));
}

#[tokio::test]
async fn test_create_scenario_rejects_null_name() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let params = CreateParams::new(Attributes::new()).with_attribute("name", serde_json::Value::Null);
    let err = client(&mock_server).create_scenario(params).await.unwrap_err();

    assert!(matches!(err, StudioError::Validation(_)));
}

#[tokio::test]
async fn test_validation_runs_before_project_resolution() {
    let mock_server = MockServer::start().await;
    let client = StudioClient::new(
        Credentials::new("test-token", "test-client", "me@example.com"),
        ClientOptions::default().with_base_url(mock_server.uri()),
    )
    .unwrap();

    let err = client
        .create_scenario(CreateParams::new(Attributes::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Validation(_)));
}

#[tokio::test]
async fn test_update_scenario_sends_type_and_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/projects/1/scenarios/200"))
        .and(body_partial_json(json!({
            "data": {"type": "scenarios", "id": "200"}
        })))
        .and(body_partial_json(json!({
            "data": {"attributes": {"description": "Now with coupons"}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "type": "scenarios",
                "id": "200",
                "attributes": {"name": "Add item", "description": "Now with coupons"}
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client(&mock_server)
        .update_scenario(
            UpdateParams::new("200", Attributes::new())
                .with_attribute("description", "Now with coupons"),
        )
        .await
        .unwrap();

    assert_eq!(updated.description(), Some("Now with coupons"));
}

#[tokio::test]
async fn test_update_rejected_by_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/projects/1/scenarios/200"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{"title": "Invalid attribute", "detail": "name can't be blank"}]
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .update_scenario(UpdateParams::new(200u64, Attributes::new()).with_attribute("name", ""))
        .await
        .unwrap_err();

    match err {
        StudioError::ApiError {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code, 422);
            assert_eq!(message, "name can't be blank");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/projects/1/scenarios/200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client(&mock_server)
        .delete_scenario(ScenarioScope::new(200u64))
        .await
        .unwrap();

    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_concurrent_creates_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/1/scenarios"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": scenario("1000", "Any", 101)})),
        )
        .expect(5)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let folder = ResourceId::from(101u64);

    let calls = (0..5).map(|i| {
        let params = CreateParams::named(format!("Scenario {i}")).in_folder(&folder);
        client.create_scenario(params)
    });
    let results = join_all(calls).await;

    assert_eq!(results.len(), 5);
    assert!(results.iter().all(Result::is_ok));
}

#[tokio::test]
async fn test_dot_segment_scenario_id_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .delete_scenario(ScenarioScope::new(".."))
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::Validation(_)));
}

#[tokio::test]
async fn test_create_scenario_rejects_non_string_name() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    for name in [json!(false), json!(0), json!([])] {
        let params = CreateParams::new(Attributes::new()).with_attribute("name", name);
        let err = client.create_scenario(params).await.unwrap_err();
        assert!(matches!(err, StudioError::Validation(_)));
    }
}
