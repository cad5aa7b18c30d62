//! Scenario endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

use super::{data, empty, not_found, numeric_id, unprocessable, RequestBody, SharedState};

/// GET /projects/{project_id}/scenarios
pub async fn list_scenarios(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
) -> Response {
    let state = state.read().await;

    if state.get_project(&project_id).is_none() {
        return not_found("project", &project_id);
    }
    data(StatusCode::OK, state.list_scenarios(&project_id))
}

/// GET /projects/{project_id}/scenarios/{scenario_id}
pub async fn get_scenario(
    State(state): State<SharedState>,
    Path((project_id, scenario_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("scenario", &scenario_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let state = state.read().await;

    match state.get_scenario(&project_id, id) {
        Some(scenario) => data(StatusCode::OK, scenario),
        None => not_found("scenario", &scenario_id),
    }
}

/// POST /projects/{project_id}/scenarios
pub async fn create_scenario(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
    Json(body): Json<RequestBody>,
) -> Response {
    let mut state = state.write().await;

    if state.get_project(&project_id).is_none() {
        return not_found("project", &project_id);
    }
    if !body.data.attributes.contains_key("name") {
        return unprocessable("Name can't be blank");
    }

    let scenario = state.create_scenario(&project_id, body.data.attributes);
    data(StatusCode::CREATED, scenario)
}

/// PATCH /projects/{project_id}/scenarios/{scenario_id}
pub async fn update_scenario(
    State(state): State<SharedState>,
    Path((project_id, scenario_id)): Path<(String, String)>,
    Json(body): Json<RequestBody>,
) -> Response {
    let id = match numeric_id("scenario", &scenario_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if body.data.resource_type.as_deref() != Some("scenarios") {
        return unprocessable("data.type must be 'scenarios'");
    }

    let mut state = state.write().await;

    match state.update_scenario(&project_id, id, body.data.attributes) {
        Some(scenario) => data(StatusCode::OK, scenario),
        None => not_found("scenario", &scenario_id),
    }
}

/// DELETE /projects/{project_id}/scenarios/{scenario_id}
pub async fn delete_scenario(
    State(state): State<SharedState>,
    Path((project_id, scenario_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("scenario", &scenario_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut state = state.write().await;

    if state.delete_scenario(&project_id, id) {
        empty()
    } else {
        not_found("scenario", &scenario_id)
    }
}
