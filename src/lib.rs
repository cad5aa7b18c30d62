//! Cucumber Studio API client library.
//!
//! A Rust library for the Cucumber Studio REST API (projects, folders,
//! scenarios, backups). [`StudioClient`] exposes one async method per
//! endpoint; each method sends one authenticated request and returns the
//! `data` member of the JSON:API response.
//!
//! # Quick Start
//!
//! ```no_run
//! use studioapi::{CreateParams, FolderScope, ProjectScope, StudioClient};
//!
//! #[tokio::main]
//! async fn main() -> studioapi::Result<()> {
//!     // Create client from environment variables
//!     let mut client = StudioClient::from_env()?;
//!
//!     // Look a project up by name and make it the default
//!     let project_id = client.find_project_id_by_name("Webshop").await?;
//!     client.set_project_id(project_id);
//!
//!     // Create a folder and a scenario inside it
//!     let folder = client.create_folder(CreateParams::named("Checkout")).await?;
//!     let scenario = client
//!         .create_scenario(CreateParams::named("Pay by card").in_folder(&folder.id))
//!         .await?;
//!     println!("Created scenario {}", scenario.id);
//!
//!     // List what the folder holds
//!     let scenarios = client
//!         .list_folder_scenarios(FolderScope::new(folder.id.clone()))
//!         .await?;
//!     println!("Folder has {} scenarios", scenarios.len());
//!
//!     let folders = client.list_folders(ProjectScope::default()).await?;
//!     println!("Project has {} folders", folders.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Default project
//!
//! Every project-scoped call takes a parameter object whose `project_id`
//! is optional. When it is `None` the client's default project is used
//! (set through [`ClientOptions::with_project_id`] or
//! [`StudioClient::set_project_id`]).
//!
//! # Configuration
//!
//! [`StudioClient::from_env`] reads:
//!
//! - `CUCUMBER_STUDIO_ACCESS_TOKEN`, `CUCUMBER_STUDIO_CLIENT`,
//!   `CUCUMBER_STUDIO_UID` (required) - API credentials
//! - `CUCUMBER_STUDIO_PROJECT_ID` (optional) - default project
//! - `CUCUMBER_STUDIO_PROXY` (optional) - proxy URL
//! - `CUCUMBER_STUDIO_API_URL` (optional) - base URL (defaults to
//!   `https://studio.cucumber.io/api`)

mod client;
mod config;
mod endpoints;
mod error;
mod models;
mod user_agent;

/// CLI argument parsing types.
pub mod cli;

/// Output formatting for CLI display.
pub mod output;

/// Mock Cucumber Studio server for testing.
#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{StudioClient, JSONAPI_ACCEPT};
pub use config::{ClientOptions, Credentials, DEFAULT_API_URL};
pub use error::{Result, StudioError};
pub use output::PrettyPrint;

// Re-export models
pub use models::{
    // Resource types
    Attributes,
    Envelope,
    Resource,
    ResourceId,
    ResourceType,
    // Parameter objects
    CreateParams,
    FolderScope,
    ProjectScope,
    ScenarioScope,
    UpdateParams,
};
