//! Scenario endpoints.

use serde_json::Value;

use crate::client::StudioClient;
use crate::error::Result;
use crate::models::{
    CreateBody, CreateParams, ProjectScope, Resource, ResourceId, ResourceType, ScenarioScope,
    UpdateBody, UpdateParams,
};

use super::{project_path, require_name};

fn scenarios_path(project_id: &ResourceId) -> Result<String> {
    Ok(format!("{}/scenarios", project_path(project_id)?))
}

fn scenario_path(project_id: &ResourceId, scenario_id: &ResourceId) -> Result<String> {
    Ok(format!("{}/{}", scenarios_path(project_id)?, scenario_id.path_segment()?))
}

impl StudioClient {
    /// List all scenarios of a project (`GET /projects/{id}/scenarios`).
    #[tracing::instrument(skip(self))]
    pub async fn list_scenarios(&self, scope: ProjectScope) -> Result<Vec<Resource>> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let response = self.get(&scenarios_path(project_id)?).await?;
        Self::unwrap_data(response).await
    }

    /// Fetch one scenario (`GET /projects/{id}/scenarios/{scenarioId}`).
    #[tracing::instrument(skip(self))]
    pub async fn get_scenario(&self, scope: ScenarioScope) -> Result<Resource> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let response = self
            .get(&scenario_path(project_id, &scope.scenario_id)?)
            .await?;
        Self::unwrap_data(response).await
    }

    /// Create a scenario (`POST /projects/{id}/scenarios`).
    ///
    /// # Errors
    ///
    /// Fails with [`StudioError::Validation`](crate::StudioError::Validation)
    /// without sending anything when `name` is missing.
    #[tracing::instrument(skip(self))]
    pub async fn create_scenario(&self, params: CreateParams) -> Result<Resource> {
        require_name(&params.attributes)?;
        let project_id = self.resolve_project(&params.project_id)?;

        let body = CreateBody::new(&params.attributes);
        let response = self.post(&scenarios_path(project_id)?, &body).await?;
        Self::unwrap_data(response).await
    }

    /// Update a scenario's attributes
    /// (`PATCH /projects/{id}/scenarios/{scenarioId}`).
    #[tracing::instrument(skip(self))]
    pub async fn update_scenario(&self, params: UpdateParams) -> Result<Resource> {
        let project_id = self.resolve_project(&params.project_id)?;

        let body = UpdateBody::new(&ResourceType::Scenarios, &params.id, &params.attributes);
        let response = self
            .patch(&scenario_path(project_id, &params.id)?, &body)
            .await?;
        Self::unwrap_data(response).await
    }

    /// Delete a scenario (`DELETE /projects/{id}/scenarios/{scenarioId}`).
    ///
    /// Returns the response body as-is; the backend answers `{}`.
    #[tracing::instrument(skip(self))]
    pub async fn delete_scenario(&self, scope: ScenarioScope) -> Result<Value> {
        let project_id = self.resolve_project(&scope.project_id)?;
        let response = self
            .delete(&scenario_path(project_id, &scope.scenario_id)?)
            .await?;
        Self::decode_body(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_paths() {
        let project = ResourceId::from(1u64);
        assert_eq!(scenarios_path(&project).unwrap(), "projects/1/scenarios");
        assert_eq!(
            scenario_path(&project, &ResourceId::from(55u64)).unwrap(),
            "projects/1/scenarios/55"
        );
    }
}
