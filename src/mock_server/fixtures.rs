//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde_json::{json, Value};

use crate::{Attributes, Resource, ResourceId, ResourceType};

/// Project id of the default scenario's main project.
pub const DEFAULT_PROJECT_ID: &str = "1";

/// Root folder of the default scenario's main project.
pub const DEFAULT_ROOT_FOLDER_ID: u64 = 100;

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Project Fixtures
    // =========================================================================

    /// Create a project with a name and nothing else.
    pub fn project(id: u64, name: &str) -> Resource {
        Self::resource(
            ResourceType::Projects,
            id,
            json!({
                "name": name,
                "description": "",
                "created-at": "2024-01-15T09:30:00.000Z",
                "updated-at": "2024-03-02T17:12:44.000Z"
            }),
        )
    }

    // =========================================================================
    // Folder Fixtures
    // =========================================================================

    /// Create a folder, optionally nested under `parent_id`.
    pub fn folder(id: u64, name: &str, parent_id: Option<u64>) -> Resource {
        Self::resource(
            ResourceType::Folders,
            id,
            json!({
                "name": name,
                "description": "",
                "parent-id": parent_id,
                "order-index": 0,
                "tags": []
            }),
        )
    }

    // =========================================================================
    // Scenario Fixtures
    // =========================================================================

    /// Create a scenario inside `folder_id`.
    pub fn scenario(id: u64, name: &str, folder_id: u64) -> Resource {
        Self::resource(
            ResourceType::Scenarios,
            id,
            json!({
                "name": name,
                "description": "",
                "folder-id": folder_id,
                "definition": format!("Scenario: {name}\n  Given something\n"),
                "tags": []
            }),
        )
    }

    // =========================================================================
    // Backup Fixtures
    // =========================================================================

    /// Create a backup record.
    pub fn backup(id: u64, name: &str, created_at: &str) -> Resource {
        Self::resource(
            ResourceType::Backups,
            id,
            json!({
                "name": name,
                "created-at": created_at
            }),
        )
    }

    fn resource(resource_type: ResourceType, id: u64, attributes: Value) -> Resource {
        let attributes = match attributes {
            Value::Object(map) => map,
            _ => Attributes::new(),
        };
        Resource {
            id: ResourceId::from(id),
            resource_type,
            attributes,
            relationships: None,
            links: None,
        }
    }

    // =========================================================================
    // Scenario Sets
    // =========================================================================

    /// Create the default scenario with common test data.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete default data set for testing.
pub struct DefaultScenario {
    /// Projects in listing order.
    pub projects: Vec<Resource>,
    /// Folders with their owning project id.
    pub folders: Vec<(String, Resource)>,
    /// Scenarios with their owning project id.
    pub scenarios: Vec<(String, Resource)>,
    /// Backups with their owning project id, oldest first.
    pub backups: Vec<(String, Resource)>,
}

impl DefaultScenario {
    /// Create the default scenario with realistic test data.
    ///
    /// Project "1" ("Webshop") has a root folder with two sub-folders and
    /// three scenarios. Project "2" ("Back office") is empty. Project "3"
    /// reuses the name "Webshop" to exercise first-match lookups.
    pub fn new() -> Self {
        let main = DEFAULT_PROJECT_ID.to_string();
        let root = DEFAULT_ROOT_FOLDER_ID;

        Self {
            projects: vec![
                Fixtures::project(1, "Webshop"),
                Fixtures::project(2, "Back office"),
                Fixtures::project(3, "Webshop"),
            ],
            folders: vec![
                (main.clone(), Fixtures::folder(root, "Webshop", None)),
                (main.clone(), Fixtures::folder(101, "Cart", Some(root))),
                (main.clone(), Fixtures::folder(102, "Checkout", Some(root))),
            ],
            scenarios: vec![
                (main.clone(), Fixtures::scenario(200, "Add item to cart", 101)),
                (main.clone(), Fixtures::scenario(201, "Remove item from cart", 101)),
                (main.clone(), Fixtures::scenario(202, "Pay by card", 102)),
            ],
            backups: vec![
                (
                    main.clone(),
                    Fixtures::backup(300, "Before release 1.0", "2024-02-01T08:00:00.000Z"),
                ),
                (
                    main,
                    Fixtures::backup(301, "Before release 1.1", "2024-03-01T08:00:00.000Z"),
                ),
            ],
        }
    }
}

impl Default for DefaultScenario {
    fn default() -> Self {
        Self::new()
    }
}
