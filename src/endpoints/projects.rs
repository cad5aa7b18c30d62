//! Project and backup endpoints.

use crate::client::StudioClient;
use crate::error::Result;
use crate::models::{ProjectScope, Resource, ResourceId};

use super::project_path;

impl StudioClient {
    /// List every project visible to the account (`GET /projects`).
    ///
    /// Returns the single page the backend sends.
    #[tracing::instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Resource>> {
        let response = self.get("projects").await?;
        Self::unwrap_data(response).await
    }

    /// Fetch one project (`GET /projects/{id}`).
    #[tracing::instrument(skip(self))]
    pub async fn get_project(&self, scope: ProjectScope) -> Result<Resource> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let response = self.get(&project_path(project_id)?).await?;
        Self::unwrap_data(response).await
    }

    /// Find the id of the first project whose `name` equals `name`.
    ///
    /// Scans the project list in the order the backend returns it, so when
    /// several projects share a name the first one listed wins. Returns
    /// `Ok(None)` when no project matches.
    #[tracing::instrument(skip(self))]
    pub async fn find_project_id_by_name(&self, name: &str) -> Result<Option<ResourceId>> {
        let projects = self.list_projects().await?;
        Ok(projects
            .into_iter()
            .find(|project| project.name() == Some(name))
            .map(|project| project.id))
    }

    /// Fetch the most recent backup of a project
    /// (`GET /projects/{id}/backups/last`).
    #[tracing::instrument(skip(self))]
    pub async fn get_project_backup(&self, scope: ProjectScope) -> Result<Resource> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let path = format!("{}/backups/last", project_path(project_id)?);
        let response = self.get(&path).await?;
        Self::unwrap_data(response).await
    }

    /// List the backups of a project (`GET /projects/{id}/backups`).
    #[tracing::instrument(skip(self))]
    pub async fn list_project_backups(&self, scope: ProjectScope) -> Result<Vec<Resource>> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let path = format!("{}/backups", project_path(project_id)?);
        let response = self.get(&path).await?;
        Self::unwrap_data(response).await
    }
}
