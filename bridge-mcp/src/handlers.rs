//! Tool handlers.
//!
//! Each handler checks configuration first, then validates its input, then
//! talks to Jira. Nothing touches the network when credentials are missing
//! or input is invalid.

use bridge_core::consts::{DEFAULT_ISSUE_TYPE, DEFAULT_JQL};
use bridge_core::{IssueLayout, is_issue_key, project_issues, project_projects};
use bridge_jira::NewIssue;
use tracing::info;

use crate::context::ServerContext;
use crate::tools::jira::{AssignToMeParams, CreateIssueParams, FetchIssuesParams, QueryIssuesParams};
use crate::types::ToolFailure;

/// Trim `value`, rejecting it when nothing is left.
fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, ToolFailure> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ToolFailure::InvalidInput(format!("{field} must not be empty")));
  }
  Ok(trimmed)
}

/// Trim an optional value, treating blank as absent.
fn optional_text(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

impl ServerContext {
  pub async fn fetch_issues(&self, params: &FetchIssuesParams) -> Result<String, ToolFailure> {
    let client = self.get_jira_client().await?;
    let jql = optional_text(params.jql.as_deref()).unwrap_or(DEFAULT_JQL);

    let issues = client
      .search_issues(jql)
      .await
      .map_err(|e| ToolFailure::jira(format!("Failed to fetch issues for JQL `{jql}`"), e))?;

    Ok(project_issues(&issues, IssueLayout::Summary))
  }

  pub async fn query_issues(&self, params: &QueryIssuesParams) -> Result<String, ToolFailure> {
    let client = self.get_jira_client().await?;
    let question = require_text("query", &params.query)?;

    let resolution = self.resolver().resolve(question).await?;
    info!(jql = %resolution.jql, source = ?resolution.source, "Resolved issue query");

    let issues = client
      .search_issues(&resolution.jql)
      .await
      .map_err(|e| ToolFailure::jira(format!("Failed to fetch issues for JQL `{}`", resolution.jql), e))?;

    Ok(project_issues(&issues, IssueLayout::SummaryWithStatus))
  }

  pub async fn create_issue(&self, params: &CreateIssueParams) -> Result<String, ToolFailure> {
    let client = self.get_jira_client().await?;
    let issue = NewIssue {
      project_key: require_text("projectKey", &params.project_key)?.to_string(),
      summary: require_text("summary", &params.summary)?.to_string(),
      description: optional_text(params.description.as_deref()).map(str::to_string),
      issue_type: optional_text(params.issue_type.as_deref())
        .unwrap_or(DEFAULT_ISSUE_TYPE)
        .to_string(),
    };

    let key = client
      .create_issue(issue)
      .await
      .map_err(|e| ToolFailure::jira("Failed to create issue", e))?;

    info!(%key, "Created issue");
    Ok(format!("Issue created successfully! Key: {key}"))
  }

  pub async fn list_projects(&self) -> Result<String, ToolFailure> {
    let client = self.get_jira_client().await?;

    let projects = client
      .list_projects()
      .await
      .map_err(|e| ToolFailure::jira("Failed to list projects", e))?;

    Ok(project_projects(&projects))
  }

  pub async fn assign_to_me(&self, params: &AssignToMeParams) -> Result<String, ToolFailure> {
    let client = self.get_jira_client().await?;
    let issue_key = require_text("issueKey", &params.issue_key)?;
    if !is_issue_key(issue_key) {
      return Err(ToolFailure::InvalidInput(format!(
        "issueKey must look like PROJ-123 or a numeric issue id, got '{issue_key}'"
      )));
    }

    let user = client
      .get_current_user()
      .await
      .map_err(|e| ToolFailure::jira("Failed to look up current user", e))?;

    client
      .assign_issue(issue_key, &user.account_id)
      .await
      .map_err(|e| ToolFailure::jira(format!("Failed to assign issue {issue_key}"), e))?;

    info!(%issue_key, account_id = %user.account_id, "Assigned issue");
    Ok(format!("Issue {issue_key} assigned to you."))
  }
}
