//! Folder endpoints, including a folder's children and scenarios.

use serde_json::Value;

use crate::client::StudioClient;
use crate::error::Result;
use crate::models::{
    CreateBody, CreateParams, FolderScope, ProjectScope, Resource, ResourceId, ResourceType,
    UpdateBody, UpdateParams,
};

use super::{project_path, require_name};

fn folders_path(project_id: &ResourceId) -> Result<String> {
    Ok(format!("{}/folders", project_path(project_id)?))
}

fn folder_path(project_id: &ResourceId, folder_id: &ResourceId) -> Result<String> {
    Ok(format!("{}/{}", folders_path(project_id)?, folder_id.path_segment()?))
}

impl StudioClient {
    /// List all folders of a project (`GET /projects/{id}/folders`).
    #[tracing::instrument(skip(self))]
    pub async fn list_folders(&self, scope: ProjectScope) -> Result<Vec<Resource>> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let response = self.get(&folders_path(project_id)?).await?;
        Self::unwrap_data(response).await
    }

    /// Fetch one folder (`GET /projects/{id}/folders/{folderId}`).
    #[tracing::instrument(skip(self))]
    pub async fn get_folder(&self, scope: FolderScope) -> Result<Resource> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let response = self.get(&folder_path(project_id, &scope.folder_id)?).await?;
        Self::unwrap_data(response).await
    }

    /// Create a folder (`POST /projects/{id}/folders`).
    ///
    /// Set `parent-id` (see [`CreateParams::with_parent`]) to nest it;
    /// otherwise the backend puts it under the root folder.
    ///
    /// # Errors
    ///
    /// Fails with [`StudioError::Validation`](crate::StudioError::Validation)
    /// without sending anything when `name` is missing.
    #[tracing::instrument(skip(self))]
    pub async fn create_folder(&self, params: CreateParams) -> Result<Resource> {
        require_name(&params.attributes)?;
        let project_id = self.resolve_project(&params.project_id)?;

        let body = CreateBody::new(&params.attributes);
        let response = self.post(&folders_path(project_id)?, &body).await?;
        Self::unwrap_data(response).await
    }

    /// Update a folder's attributes
    /// (`PATCH /projects/{id}/folders/{folderId}`).
    #[tracing::instrument(skip(self))]
    pub async fn update_folder(&self, params: UpdateParams) -> Result<Resource> {
        let project_id = self.resolve_project(&params.project_id)?;

        let body = UpdateBody::new(&ResourceType::Folders, &params.id, &params.attributes);
        let response = self
            .patch(&folder_path(project_id, &params.id)?, &body)
            .await?;
        Self::unwrap_data(response).await
    }

    /// Delete a folder (`DELETE /projects/{id}/folders/{folderId}`).
    ///
    /// Returns the response body as-is; the backend answers `{}`.
    #[tracing::instrument(skip(self))]
    pub async fn delete_folder(&self, scope: FolderScope) -> Result<Value> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let response = self
            .delete(&folder_path(project_id, &scope.folder_id)?)
            .await?;
        Self::decode_body(response).await
    }

    /// List the direct sub-folders of a folder
    /// (`GET /projects/{id}/folders/{folderId}/children`).
    #[tracing::instrument(skip(self))]
    pub async fn list_child_folders(&self, scope: FolderScope) -> Result<Vec<Resource>> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let path = format!("{}/children", folder_path(project_id, &scope.folder_id)?);
        let response = self.get(&path).await?;
        Self::unwrap_data(response).await
    }

    /// Delete every sub-folder of a folder
    /// (`DELETE /projects/{id}/folders/{folderId}/children`).
    #[tracing::instrument(skip(self))]
    pub async fn delete_child_folders(&self, scope: FolderScope) -> Result<Value> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let path = format!("{}/children", folder_path(project_id, &scope.folder_id)?);
        let response = self.delete(&path).await?;
        Self::decode_body(response).await
    }

    /// List the scenarios directly inside a folder
    /// (`GET /projects/{id}/folders/{folderId}/scenarios`).
    #[tracing::instrument(skip(self))]
    pub async fn list_folder_scenarios(&self, scope: FolderScope) -> Result<Vec<Resource>> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let path = format!("{}/scenarios", folder_path(project_id, &scope.folder_id)?);
        let response = self.get(&path).await?;
        Self::unwrap_data(response).await
    }

    /// Delete every scenario inside a folder
    /// (`DELETE /projects/{id}/folders/{folderId}/scenarios`).
    #[tracing::instrument(skip(self))]
    pub async fn clear_folder_scenarios(&self, scope: FolderScope) -> Result<Value> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let path = format!("{}/scenarios", folder_path(project_id, &scope.folder_id)?);
        let response = self.delete(&path).await?;
        Self::decode_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_paths() {
        let project = ResourceId::from("proj");
        assert_eq!(folders_path(&project).unwrap(), "projects/proj/folders");
        assert_eq!(
            folder_path(&project, &ResourceId::from(8u64)).unwrap(),
            "projects/proj/folders/8"
        );
    }
}
