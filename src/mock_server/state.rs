//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Cucumber Studio server.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::{Attributes, Credentials, Resource, ResourceId, ResourceType};

/// First id handed out to created folders and scenarios.
const FIRST_GENERATED_ID: u64 = 1000;

/// Attributes holding folder references. The real API stores them as
/// numbers whatever form the request used.
const FOLDER_REFERENCES: &[&str] = &["folder-id", "parent-id"];

/// A folder or scenario together with the project that owns it.
#[derive(Debug, Clone)]
pub struct Stored {
    pub project_id: String,
    pub resource: Resource,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug)]
pub struct MockState {
    /// Projects in the order `GET /projects` returns them.
    pub projects: Vec<Resource>,

    /// Folders indexed by numeric id.
    pub folders: BTreeMap<u64, Stored>,

    /// Scenarios indexed by numeric id.
    pub scenarios: BTreeMap<u64, Stored>,

    /// Backups per project id, oldest first.
    pub backups: HashMap<String, Vec<Resource>>,

    /// If set, requests must carry exactly these credentials.
    pub required_credentials: Option<Credentials>,

    next_id: u64,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            folders: BTreeMap::new(),
            scenarios: BTreeMap::new(),
            backups: HashMap::new(),
            required_credentials: None,
            next_id: FIRST_GENERATED_ID,
        }
    }
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state.
    pub fn with_project(mut self, project: Resource) -> Self {
        self.projects.push(project);
        self
    }

    /// Add a folder owned by `project_id`.
    pub fn with_folder(mut self, project_id: &str, folder: Resource) -> Self {
        self.insert(ResourceType::Folders, project_id, folder);
        self
    }

    /// Add a scenario owned by `project_id`.
    pub fn with_scenario(mut self, project_id: &str, scenario: Resource) -> Self {
        self.insert(ResourceType::Scenarios, project_id, scenario);
        self
    }

    /// Add a backup for `project_id`. The last one added is "last".
    pub fn with_backup(mut self, project_id: &str, backup: Resource) -> Self {
        self.backups
            .entry(project_id.to_string())
            .or_default()
            .push(backup);
        self
    }

    /// Require these credentials on every request.
    pub fn with_required_credentials(mut self, credentials: Credentials) -> Self {
        self.required_credentials = Some(credentials);
        self
    }

    fn insert(&mut self, kind: ResourceType, project_id: &str, resource: Resource) {
        let Some(id) = resource.id.as_u64() else {
            debug_assert!(false, "{kind} fixture id '{}' is not numeric", resource.id);
            return;
        };
        self.next_id = self.next_id.max(id.saturating_add(1));
        let stored = Stored {
            project_id: project_id.to_string(),
            resource,
        };
        match kind {
            ResourceType::Folders => self.folders.insert(id, stored),
            _ => self.scenarios.insert(id, stored),
        };
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    // =========================================================================
    // Projects
    // =========================================================================

    pub fn list_projects(&self) -> Vec<Resource> {
        self.projects.clone()
    }

    pub fn get_project(&self, id: &str) -> Option<&Resource> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn list_backups(&self, project_id: &str) -> Vec<Resource> {
        self.backups.get(project_id).cloned().unwrap_or_default()
    }

    pub fn last_backup(&self, project_id: &str) -> Option<&Resource> {
        self.backups.get(project_id).and_then(|b| b.last())
    }

    // =========================================================================
    // Folders
    // =========================================================================

    pub fn list_folders(&self, project_id: &str) -> Vec<Resource> {
        owned_by(&self.folders, project_id).cloned().collect()
    }

    pub fn get_folder(&self, project_id: &str, id: u64) -> Option<&Resource> {
        find(&self.folders, project_id, id)
    }

    pub fn create_folder(&mut self, project_id: &str, attributes: Attributes) -> Resource {
        self.create(ResourceType::Folders, project_id, attributes)
    }

    pub fn update_folder(
        &mut self,
        project_id: &str,
        id: u64,
        attributes: Attributes,
    ) -> Option<&Resource> {
        update(&mut self.folders, project_id, id, attributes)
    }

    /// Remove a folder, its sub-folders and every scenario inside them.
    pub fn delete_folder(&mut self, project_id: &str, id: u64) -> bool {
        if self.get_folder(project_id, id).is_none() {
            return false;
        }

        let mut doomed = vec![id];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let parent = doomed[cursor];
            doomed.extend(self.child_ids(project_id, parent));
            cursor += 1;
        }

        for folder_id in doomed {
            self.folders.remove(&folder_id);
            self.clear_folder_scenarios(project_id, folder_id);
        }
        true
    }

    pub fn list_children(&self, project_id: &str, id: u64) -> Vec<Resource> {
        owned_by(&self.folders, project_id)
            .filter(|f| references(f, "parent-id", id))
            .cloned()
            .collect()
    }

    /// Remove every sub-folder of `id`. Returns false if `id` is unknown.
    pub fn delete_children(&mut self, project_id: &str, id: u64) -> bool {
        if self.get_folder(project_id, id).is_none() {
            return false;
        }
        for child in self.child_ids(project_id, id) {
            self.delete_folder(project_id, child);
        }
        true
    }

    pub fn list_folder_scenarios(&self, project_id: &str, id: u64) -> Vec<Resource> {
        owned_by(&self.scenarios, project_id)
            .filter(|s| references(s, "folder-id", id))
            .cloned()
            .collect()
    }

    /// Remove every scenario inside folder `id`.
    pub fn clear_folder_scenarios(&mut self, project_id: &str, id: u64) {
        self.scenarios.retain(|_, s| {
            s.project_id != project_id || !references(&s.resource, "folder-id", id)
        });
    }

    fn child_ids(&self, project_id: &str, id: u64) -> Vec<u64> {
        self.list_children(project_id, id)
            .iter()
            .filter_map(|f| f.id.as_u64())
            .collect()
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    pub fn list_scenarios(&self, project_id: &str) -> Vec<Resource> {
        owned_by(&self.scenarios, project_id).cloned().collect()
    }

    pub fn get_scenario(&self, project_id: &str, id: u64) -> Option<&Resource> {
        find(&self.scenarios, project_id, id)
    }

    pub fn create_scenario(&mut self, project_id: &str, attributes: Attributes) -> Resource {
        self.create(ResourceType::Scenarios, project_id, attributes)
    }

    pub fn update_scenario(
        &mut self,
        project_id: &str,
        id: u64,
        attributes: Attributes,
    ) -> Option<&Resource> {
        update(&mut self.scenarios, project_id, id, attributes)
    }

    pub fn delete_scenario(&mut self, project_id: &str, id: u64) -> bool {
        if self.get_scenario(project_id, id).is_none() {
            return false;
        }
        self.scenarios.remove(&id).is_some()
    }

    fn create(&mut self, kind: ResourceType, project_id: &str, attributes: Attributes) -> Resource {
        let id = self.allocate_id();
        let resource = Resource {
            id: ResourceId::from(id),
            resource_type: kind.clone(),
            attributes: normalize(attributes),
            relationships: None,
            links: None,
        };
        self.insert(kind, project_id, resource.clone());
        resource
    }
}

fn owned_by<'a>(
    store: &'a BTreeMap<u64, Stored>,
    project_id: &'a str,
) -> impl Iterator<Item = &'a Resource> + 'a {
    store
        .values()
        .filter(move |s| s.project_id == project_id)
        .map(|s| &s.resource)
}

fn find<'a>(store: &'a BTreeMap<u64, Stored>, project_id: &str, id: u64) -> Option<&'a Resource> {
    store
        .get(&id)
        .filter(|s| s.project_id == project_id)
        .map(|s| &s.resource)
}

fn update<'a>(
    store: &'a mut BTreeMap<u64, Stored>,
    project_id: &str,
    id: u64,
    attributes: Attributes,
) -> Option<&'a Resource> {
    let stored = store.get_mut(&id).filter(|s| s.project_id == project_id)?;
    stored.resource.attributes.extend(normalize(attributes));
    Some(&stored.resource)
}

fn references(resource: &Resource, key: &str, id: u64) -> bool {
    resource.attribute(key).and_then(Value::as_u64) == Some(id)
}

/// Store folder references as numbers, like the real backend.
fn normalize(mut attributes: Attributes) -> Attributes {
    for key in FOLDER_REFERENCES {
        if let Some(Value::String(text)) = attributes.get(*key) {
            if let Ok(n) = text.parse::<u64>() {
                attributes.insert((*key).to_string(), Value::from(n));
            }
        }
    }
    attributes
}
