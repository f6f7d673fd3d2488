//! # Jira Search Endpoint

use bridge_core::IssueSummary;
use reqwest::Method;

use crate::client::JiraClient;
use crate::consts::SEARCH_PATH;
use crate::error::JiraError;
use crate::models::SearchResponse;

impl JiraClient {
  /// Run a JQL search. An empty filter sends no `jql` parameter, which
  /// matches every issue the account can see.
  pub async fn search_issues(&self, jql: &str) -> Result<Vec<IssueSummary>, JiraError> {
    let params = [("jql", jql)];
    let query: &[(&str, &str)] = if jql.is_empty() { &[] } else { &params };

    let value = self.call(Method::GET, SEARCH_PATH, query, None).await?;
    let response: SearchResponse = serde_json::from_value(value)?;
    Ok(response.issues.into_iter().map(IssueSummary::from).collect())
  }
}
