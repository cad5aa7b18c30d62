//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use serde_json::Value;

use crate::{Resource, ResourceType};

/// Attributes shown first, in this order, before the rest.
const LEADING_ATTRIBUTES: &[&str] = &["name", "description", "folder-id", "parent-id"];

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for Resource {
    fn pretty_print(&self) -> String {
        let header = format!("{}: {}", kind_label(&self.resource_type), self.id);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        let leading = LEADING_ATTRIBUTES
            .iter()
            .filter_map(|key| self.attributes.get(*key).map(|v| (*key, v)));

        let mut rest: Vec<(&str, &Value)> = self
            .attributes
            .iter()
            .filter(|(key, _)| !LEADING_ATTRIBUTES.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        rest.sort_by_key(|(key, _)| *key);

        for (key, value) in leading.chain(rest) {
            lines.push(format!("{:<16}{}", format!("{}:", label(key)), render(value)));
        }

        lines.join("\n")
    }
}

/// Render an attribute value for a single display line.
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_label(resource_type: &ResourceType) -> String {
    match resource_type {
        ResourceType::Projects => "Project".to_string(),
        ResourceType::Folders => "Folder".to_string(),
        ResourceType::Scenarios => "Scenario".to_string(),
        ResourceType::Backups => "Backup".to_string(),
        ResourceType::Other(other) => other.clone(),
    }
}

/// `folder-id` → `Folder id`
fn label(key: &str) -> String {
    let spaced = key.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_pretty_print_format() {
        let folder: Resource = serde_json::from_value(serde_json::json!({
            "type": "folders",
            "id": "4411",
            "attributes": {
                "name": "Checkout",
                "parent-id": 12,
                "order": 3
            }
        }))
        .unwrap();

        let output = folder.pretty_print();
        assert!(output.starts_with("Folder: 4411"));
        assert!(output.contains("Name:           Checkout"));
        assert!(output.contains("Parent id:      12"));
        assert!(output.contains("Order:"));
    }

    #[test]
    fn test_leading_attributes_come_first() {
        let scenario: Resource = serde_json::from_value(serde_json::json!({
            "type": "scenarios",
            "id": 9,
            "attributes": { "alpha": true, "name": "Pay" }
        }))
        .unwrap();

        let output = scenario.pretty_print();
        let name_at = output.find("Name:").unwrap();
        let alpha_at = output.find("Alpha:").unwrap();
        assert!(name_at < alpha_at);
    }

    #[test]
    fn test_render_values() {
        assert_eq!(render(&Value::Null), "-");
        assert_eq!(render(&serde_json::json!("text")), "text");
        assert_eq!(render(&serde_json::json!(5)), "5");
        assert_eq!(render(&serde_json::json!(["a"])), r#"["a"]"#);
    }
}
