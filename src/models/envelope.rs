//! JSON:API envelopes for request and response bodies.

use serde::{Deserialize, Serialize};

use super::resource::{Attributes, ResourceId, ResourceType};

/// Top-level `{ "data": ... }` wrapper of every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body of a create call: `{"data": {"attributes": {...}}}`.
#[derive(Debug, Serialize)]
pub(crate) struct CreateBody<'a> {
    data: CreateData<'a>,
}

#[derive(Debug, Serialize)]
struct CreateData<'a> {
    attributes: &'a Attributes,
}

impl<'a> CreateBody<'a> {
    pub(crate) fn new(attributes: &'a Attributes) -> Self {
        Self {
            data: CreateData { attributes },
        }
    }
}

/// Body of an update call: `{"data": {"type", "id", "attributes"}}`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateBody<'a> {
    data: UpdateData<'a>,
}

#[derive(Debug, Serialize)]
struct UpdateData<'a> {
    #[serde(rename = "type")]
    resource_type: &'a ResourceType,
    id: &'a ResourceId,
    attributes: &'a Attributes,
}

impl<'a> UpdateBody<'a> {
    pub(crate) fn new(
        resource_type: &'a ResourceType,
        id: &'a ResourceId,
        attributes: &'a Attributes,
    ) -> Self {
        Self {
            data: UpdateData {
                resource_type,
                id,
                attributes,
            },
        }
    }
}
