//! Parameter structs for Jira tools.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct FetchIssuesParams {
  /// JQL query (e.g. "project = PROJ AND status = 'To Do'"). Defaults to the caller's assigned issues.
  #[serde(default)]
  pub jql: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct QueryIssuesParams {
  /// Question about issues in plain English (e.g. "What issues do I have assigned?").
  pub query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueParams {
  /// Jira project key (e.g. "PROJ").
  pub project_key: String,
  /// One-line issue summary.
  pub summary: String,
  /// Optional plain-text description.
  #[serde(default)]
  pub description: Option<String>,
  /// Issue type name (e.g. "Bug"). Defaults to "Task".
  #[serde(default)]
  pub issue_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignToMeParams {
  /// Jira issue key (e.g. "PROJ-123").
  pub issue_key: String,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_create_issue_params_use_camel_case() {
    let params: CreateIssueParams = serde_json::from_value(json!({
        "projectKey": "PROJ",
        "summary": "Fix login",
        "issueType": "Bug"
    }))
    .unwrap();

    assert_eq!(params.project_key, "PROJ");
    assert_eq!(params.issue_type.as_deref(), Some("Bug"));
    assert_eq!(params.description, None);
  }

  #[test]
  fn test_create_issue_params_require_project_and_summary() {
    assert!(serde_json::from_value::<CreateIssueParams>(json!({ "summary": "x" })).is_err());
    assert!(serde_json::from_value::<CreateIssueParams>(json!({ "projectKey": "PROJ" })).is_err());
  }

  #[test]
  fn test_fetch_issues_params_allow_empty_object() {
    let params: FetchIssuesParams = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params.jql, None);
  }

  #[test]
  fn test_assign_params_use_camel_case() {
    let params: AssignToMeParams = serde_json::from_value(json!({ "issueKey": "PROJ-9" })).unwrap();
    assert_eq!(params.issue_key, "PROJ-9");
  }
}
