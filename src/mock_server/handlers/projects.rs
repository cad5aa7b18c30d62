//! Project and backup endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use super::{data, not_found, SharedState};

/// GET /projects
pub async fn list_projects(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    data(StatusCode::OK, state.list_projects())
}

/// GET /projects/{project_id}
pub async fn get_project(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
) -> Response {
    let state = state.read().await;

    match state.get_project(&project_id) {
        Some(project) => data(StatusCode::OK, project),
        None => not_found("project", &project_id),
    }
}

/// GET /projects/{project_id}/backups
pub async fn list_backups(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
) -> Response {
    let state = state.read().await;

    if state.get_project(&project_id).is_none() {
        return not_found("project", &project_id);
    }
    data(StatusCode::OK, state.list_backups(&project_id))
}

/// GET /projects/{project_id}/backups/last
pub async fn last_backup(
    State(state): State<SharedState>,
    Path(project_id): Path<String>,
) -> Response {
    let state = state.read().await;

    match state.last_backup(&project_id) {
        Some(backup) => data(StatusCode::OK, backup),
        None => not_found("backup for project", &project_id),
    }
}
