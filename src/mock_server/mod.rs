//! Mock Cucumber Studio API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the
//! Cucumber Studio API for integration and end-to-end testing. Unlike
//! wiremock which mocks at the HTTP level per-test, this server maintains
//! state across requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use studioapi::mock_server::MockServer;
//! use studioapi::{ClientOptions, Credentials, ProjectScope, StudioClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = StudioClient::new(
//!         Credentials::new("token", "client", "uid"),
//!         ClientOptions::default().with_base_url(server.url()).with_project_id("1"),
//!     )
//!     .unwrap();
//!
//!     // Server comes with default fixtures
//!     let project = client.get_project(ProjectScope::default()).await.unwrap();
//!     assert_eq!(project.name(), Some("Webshop"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, DEFAULT_PROJECT_ID, DEFAULT_ROOT_FOLDER_ID};
pub use server::MockServer;
pub use state::{MockState, Stored};
