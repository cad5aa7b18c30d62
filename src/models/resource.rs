//! JSON:API resources: identifiers, type discriminators and the resource
//! object itself.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::StudioError;

/// Attribute map of a resource. The schema belongs to the backend.
pub type Attributes = serde_json::Map<String, Value>;

/// Opaque backend identifier.
///
/// The API sends ids as JSON strings but accepts and sometimes echoes
/// numbers (for example `folder-id` inside attributes). Both forms
/// deserialize to the same textual id; ids always serialize as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric form of the id, when it has one.
    ///
    /// Attributes such as `folder-id` must be sent as numbers.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The id as a JSON attribute value: a number when numeric,
    /// otherwise a string.
    pub fn to_attribute(&self) -> Value {
        match self.as_u64() {
            Some(n) => Value::from(n),
            None => Value::from(self.0.clone()),
        }
    }

    /// Percent-encoded form for use as a URL path segment.
    ///
    /// Empty, `.` and `..` ids are rejected: URL resolution would drop or
    /// climb the segment and address a different endpoint.
    pub(crate) fn path_segment(&self) -> crate::error::Result<String> {
        match self.0.as_str() {
            "" | "." | ".." => Err(StudioError::Validation(format!(
                "'{}' is not a valid resource id",
                self.0
            ))),
            id => Ok(urlencoding::encode(id).into_owned()),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<&String> for ResourceId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for ResourceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ResourceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Unsigned(n) => Self(n.to_string()),
            Raw::Signed(n) => Self(n.to_string()),
        })
    }
}

/// JSON:API `type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    Projects,
    Folders,
    Scenarios,
    Backups,
    /// A type this client does not know about yet.
    Other(String),
}

impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Projects => "projects",
            ResourceType::Folders => "folders",
            ResourceType::Scenarios => "scenarios",
            ResourceType::Backups => "backups",
            ResourceType::Other(other) => other,
        }
    }
}

impl From<String> for ResourceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "projects" => ResourceType::Projects,
            "folders" => ResourceType::Folders,
            "scenarios" => ResourceType::Scenarios,
            "backups" => ResourceType::Backups,
            _ => ResourceType::Other(value),
        }
    }
}

impl From<ResourceType> for String {
    fn from(value: ResourceType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A backend-owned entity: project, folder, scenario or backup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,

    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    #[serde(default)]
    pub attributes: Attributes,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

impl Resource {
    /// Look up a single attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// String attribute, if present and a string.
    pub fn str_attribute(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    /// The `name` attribute.
    pub fn name(&self) -> Option<&str> {
        self.str_attribute("name")
    }

    /// The `description` attribute.
    pub fn description(&self) -> Option<&str> {
        self.str_attribute("description")
    }

    /// Parent folder of a scenario or folder, from `folder-id` or
    /// `parent-id`.
    pub fn folder_id(&self) -> Option<ResourceId> {
        ["folder-id", "parent-id"]
            .iter()
            .filter_map(|key| self.attribute(key))
            .find_map(|value| ResourceId::deserialize(value).ok())
    }
}
