//! Per-call parameter objects.
//!
//! Every endpoint method takes exactly one of these. `project_id` is
//! optional everywhere: when it is `None` the client's default project is
//! used, and the call fails before sending anything if there is none.

use serde_json::Value;

use super::resource::{Attributes, ResourceId};

/// Calls scoped to a whole project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectScope {
    pub project_id: Option<ResourceId>,
}

impl ProjectScope {
    /// Use the client's default project.
    pub fn default_project() -> Self {
        Self::default()
    }

    pub fn in_project(project_id: impl Into<ResourceId>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }
}

/// Calls addressing one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderScope {
    pub project_id: Option<ResourceId>,
    pub folder_id: ResourceId,
}

impl FolderScope {
    pub fn new(folder_id: impl Into<ResourceId>) -> Self {
        Self {
            project_id: None,
            folder_id: folder_id.into(),
        }
    }

    pub fn in_project(mut self, project_id: impl Into<ResourceId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Calls addressing one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioScope {
    pub project_id: Option<ResourceId>,
    pub scenario_id: ResourceId,
}

impl ScenarioScope {
    pub fn new(scenario_id: impl Into<ResourceId>) -> Self {
        Self {
            project_id: None,
            scenario_id: scenario_id.into(),
        }
    }

    pub fn in_project(mut self, project_id: impl Into<ResourceId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Attributes of a folder or scenario to create. `name` is mandatory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateParams {
    pub project_id: Option<ResourceId>,
    pub attributes: Attributes,
}

impl CreateParams {
    pub fn new(attributes: Attributes) -> Self {
        Self {
            project_id: None,
            attributes,
        }
    }

    /// Start from just a `name` attribute.
    pub fn named(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self::default().with_attribute("name", name)
    }

    pub fn in_project(mut self, project_id: impl Into<ResourceId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Place the new resource in a folder (`folder-id` for scenarios).
    pub fn in_folder(self, folder_id: &ResourceId) -> Self {
        self.with_attribute("folder-id", folder_id.to_attribute())
    }

    /// Make the new folder a child of `parent_id`.
    pub fn with_parent(self, parent_id: &ResourceId) -> Self {
        self.with_attribute("parent-id", parent_id.to_attribute())
    }
}

/// New attribute values for an existing folder or scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    pub project_id: Option<ResourceId>,
    pub id: ResourceId,
    pub attributes: Attributes,
}

impl UpdateParams {
    pub fn new(id: impl Into<ResourceId>, attributes: Attributes) -> Self {
        Self {
            project_id: None,
            id: id.into(),
            attributes,
        }
    }

    pub fn in_project(mut self, project_id: impl Into<ResourceId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
