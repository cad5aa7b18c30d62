//! HTTP request handlers for the mock server.

pub mod auth;
pub mod folders;
pub mod projects;
pub mod scenarios;

pub use auth::*;
pub use folders::*;
pub use projects::*;
pub use scenarios::*;

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::Attributes;

/// State handle shared by every handler.
pub type SharedState = Arc<RwLock<MockState>>;

/// Body of create and update requests: `{"data": {"attributes": {...}}}`.
#[derive(Debug, Deserialize)]
pub struct RequestBody {
    pub data: RequestData,
}

#[derive(Debug, Deserialize)]
pub struct RequestData {
    #[serde(rename = "type", default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub attributes: Attributes,
}

/// `{"data": ...}` with the given status.
pub(crate) fn data<T: Serialize>(status: StatusCode, value: T) -> Response {
    (status, Json(serde_json::json!({ "data": value }))).into_response()
}

/// `200 {}` as the backend answers successful deletes.
pub(crate) fn empty() -> Response {
    (StatusCode::OK, Json(serde_json::json!({}))).into_response()
}

pub(crate) fn not_found(kind: &str, id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "errors": [{
                "status": "404",
                "title": "Not found",
                "detail": format!("No {kind} found with id: {id}")
            }]
        })),
    )
        .into_response()
}

pub(crate) fn unprocessable(detail: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({
            "errors": [{
                "status": "422",
                "title": "Unprocessable entity",
                "detail": detail
            }]
        })),
    )
        .into_response()
}

/// Numeric id from a path segment; folder and scenario ids always are.
pub(crate) fn numeric_id(kind: &str, raw: &str) -> Result<u64, Response> {
    raw.parse().map_err(|_| not_found(kind, raw))
}
