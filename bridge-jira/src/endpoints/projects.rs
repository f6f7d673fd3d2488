use bridge_core::ProjectSummary;
use reqwest::Method;

use crate::client::JiraClient;
use crate::consts::PROJECT_SEARCH_PATH;
use crate::error::JiraError;
use crate::models::ProjectSearchResponse;

impl JiraClient {
  /// List the projects visible to the authenticated account
  pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, JiraError> {
    let value = self.call(Method::GET, PROJECT_SEARCH_PATH, &[], None).await?;
    let response: ProjectSearchResponse = serde_json::from_value(value)?;
    Ok(
      response
        .into_projects()
        .into_iter()
        .map(ProjectSummary::from)
        .collect(),
    )
  }
}
