//! Folder endpoint handlers, including children and folder scenarios.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

use super::{data, empty, not_found, numeric_id, unprocessable, RequestBody, SharedState};

/// GET /projects/{project_id}/folders
pub async fn list_folders(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
) -> Response {
    let state = state.read().await;

    if state.get_project(&project_id).is_none() {
        return not_found("project", &project_id);
    }
    data(StatusCode::OK, state.list_folders(&project_id))
}

/// GET /projects/{project_id}/folders/{folder_id}
pub async fn get_folder(
    State(state): State<SharedState>,
    Path((project_id, folder_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("folder", &folder_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let state = state.read().await;

    match state.get_folder(&project_id, id) {
        Some(folder) => data(StatusCode::OK, folder),
        None => not_found("folder", &folder_id),
    }
}

/// POST /projects/{project_id}/folders
pub async fn create_folder(
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

    let folder = state.create_folder(&project_id, body.data.attributes);
    data(StatusCode::CREATED, folder)
}

/// PATCH /projects/{project_id}/folders/{folder_id}
pub async fn update_folder(
    State(state): State<SharedState>,
    Path((project_id, folder_id)): Path<(String, String)>,
    Json(body): Json<RequestBody>,
) -> Response {
    let id = match numeric_id("folder", &folder_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    if body.data.resource_type.as_deref() != Some("folders") {
        return unprocessable("data.type must be 'folders'");
    }

    let mut state = state.write().await;

    match state.update_folder(&project_id, id, body.data.attributes) {
        Some(folder) => data(StatusCode::OK, folder),
        None => not_found("folder", &folder_id),
    }
}

/// DELETE /projects/{project_id}/folders/{folder_id}
pub async fn delete_folder(
    State(state): State<SharedState>,
    Path((project_id, folder_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("folder", &folder_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut state = state.write().await;

    if state.delete_folder(&project_id, id) {
        empty()
    } else {
        not_found("folder", &folder_id)
    }
}

/// GET /projects/{project_id}/folders/{folder_id}/children
pub async fn list_children(
    State(state): State<SharedState>,
    Path((project_id, folder_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("folder", &folder_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let state = state.read().await;

    if state.get_folder(&project_id, id).is_none() {
        return not_found("folder", &folder_id);
    }
    data(StatusCode::OK, state.list_children(&project_id, id))
}

/// DELETE /projects/{project_id}/folders/{folder_id}/children
pub async fn delete_children(
    State(state): State<SharedState>,
    Path((project_id, folder_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("folder", &folder_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut state = state.write().await;

    if state.delete_children(&project_id, id) {
        empty()
    } else {
        not_found("folder", &folder_id)
    }
}

/// GET /projects/{project_id}/folders/{folder_id}/scenarios
pub async fn list_folder_scenarios(
    State(state): State<SharedState>,
    Path((project_id, folder_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("folder", &folder_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let state = state.read().await;

    if state.get_folder(&project_id, id).is_none() {
        return not_found("folder", &folder_id);
    }
    data(StatusCode::OK, state.list_folder_scenarios(&project_id, id))
}

/// DELETE /projects/{project_id}/folders/{folder_id}/scenarios
pub async fn clear_folder_scenarios(
    State(state): State<SharedState>,
    Path((project_id, folder_id)): Path<(String, String)>,
) -> Response {
    let id = match numeric_id("folder", &folder_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let mut state = state.write().await;

    if state.get_folder(&project_id, id).is_none() {
        return not_found("folder", &folder_id);
    }
    state.clear_folder_scenarios(&project_id, id);
    empty()
}
