//! Mock Cucumber Studio API server.
//!
//! Provides an axum-based HTTP server that simulates the Cucumber Studio API.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock Cucumber Studio API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL as `ClientOptions::base_url` when testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    pub fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for project in scenario.projects {
            state = state.with_project(project);
        }

        for (project_id, folder) in scenario.folders {
            state = state.with_folder(&project_id, folder);
        }

        for (project_id, scenario) in scenario.scenarios {
            state = state.with_scenario(&project_id, scenario);
        }

        for (project_id, backup) in scenario.backups {
            state = state.with_backup(&project_id, backup);
        }

        state
    }

    /// Create the axum router with all routes.
    pub fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Project routes
            .route("/projects", get(handlers::list_projects))
            .route("/projects/:project_id", get(handlers::get_project))
            .route("/projects/:project_id/backups", get(handlers::list_backups))
            .route(
                "/projects/:project_id/backups/last",
                get(handlers::last_backup),
            )
            // Scenario routes
            .route(
                "/projects/:project_id/scenarios",
                get(handlers::list_scenarios).post(handlers::create_scenario),
            )
            .route(
                "/projects/:project_id/scenarios/:scenario_id",
                get(handlers::get_scenario)
                    .patch(handlers::update_scenario)
                    .delete(handlers::delete_scenario),
            )
            // Folder routes
            .route(
                "/projects/:project_id/folders",
                get(handlers::list_folders).post(handlers::create_folder),
            )
            .route(
                "/projects/:project_id/folders/:folder_id",
                get(handlers::get_folder)
                    .patch(handlers::update_folder)
                    .delete(handlers::delete_folder),
            )
            .route(
                "/projects/:project_id/folders/:folder_id/children",
                get(handlers::list_children).delete(handlers::delete_children),
            )
            .route(
                "/projects/:project_id/folders/:folder_id/scenarios",
                get(handlers::list_folder_scenarios).delete(handlers::clear_folder_scenarios),
            )
            .layer(middleware::from_fn_with_state(
                state.clone(),
                handlers::require_auth,
            ))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
