//! Endpoint methods on [`StudioClient`](crate::StudioClient).
//!
//! Each method builds a path from identifiers, optionally a JSON:API body,
//! issues one request and unwraps the `data` member of the response.
//! Nothing is retried or cached.

mod folders;
mod projects;
mod scenarios;

use serde_json::Value;

use crate::error::{Result, StudioError};
use crate::models::{Attributes, ResourceId};

fn project_path(project_id: &ResourceId) -> Result<String> {
    Ok(format!("projects/{}", project_id.path_segment()?))
}

/// Creation bodies must carry a non-blank string `name` attribute.
fn require_name(attributes: &Attributes) -> Result<()> {
    match attributes.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(()),
        Some(Value::String(_)) => Err(StudioError::Validation(
            "'name' attribute is empty".to_string(),
        )),
        None | Some(Value::Null) => Err(StudioError::Validation("no 'name' attribute".to_string())),
        Some(other) => Err(StudioError::Validation(format!(
            "'name' attribute must be a string, got {other}"
        ))),
    }
}
