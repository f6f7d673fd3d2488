use bridge_core::{IssueSummary, ProjectSummary};
use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub email: String,
  pub api_token: String,
}

/// Response body of `/rest/api/3/search`
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  pub key: String,
  #[serde(default)]
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
#[derive(Debug, Default, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: String,
  pub status: Option<JiraIssueStatus>,
}

/// Represents a Jira issue status
#[derive(Debug, Deserialize)]
pub struct JiraIssueStatus {
  pub name: String,
}

impl From<JiraIssue> for IssueSummary {
  fn from(issue: JiraIssue) -> Self {
    Self {
      key: issue.key,
      summary: issue.fields.summary,
      status: issue.fields.status.map(|status| status.name),
    }
  }
}

/// Response body of `/rest/api/3/project/search`
///
/// Jira Cloud returns `values`; some older deployments return `projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectSearchResponse {
  pub values: Option<Vec<JiraProject>>,
  pub projects: Option<Vec<JiraProject>>,
}

impl ProjectSearchResponse {
  pub fn into_projects(self) -> Vec<JiraProject> {
    self.values.or(self.projects).unwrap_or_default()
  }
}

/// Represents a Jira project
#[derive(Debug, Deserialize)]
pub struct JiraProject {
  pub key: String,
  pub name: String,
}

impl From<JiraProject> for ProjectSummary {
  fn from(project: JiraProject) -> Self {
    Self {
      key: project.key,
      name: project.name,
    }
  }
}

/// Caller-facing description of an issue to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
  pub project_key: String,
  pub summary: String,
  pub description: Option<String>,
  pub issue_type: String,
}

/// Represents an issue creation payload
#[derive(Debug, Serialize)]
pub struct CreateIssueRequest {
  pub fields: CreateIssueFields,
}

#[derive(Debug, Serialize)]
pub struct CreateIssueFields {
  pub project: ProjectRef,
  pub summary: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<AdfDocument>,
  pub issuetype: IssueTypeRef,
}

#[derive(Debug, Serialize)]
pub struct ProjectRef {
  pub key: String,
}

#[derive(Debug, Serialize)]
pub struct IssueTypeRef {
  pub name: String,
}

impl From<NewIssue> for CreateIssueRequest {
  fn from(issue: NewIssue) -> Self {
    Self {
      fields: CreateIssueFields {
        project: ProjectRef { key: issue.project_key },
        summary: issue.summary,
        description: issue.description.as_deref().map(AdfDocument::paragraph),
        issuetype: IssueTypeRef { name: issue.issue_type },
      },
    }
  }
}

/// Atlassian Document Format document. API v3 rejects plain-string
/// descriptions.
#[derive(Debug, Serialize)]
pub struct AdfDocument {
  pub r#type: &'static str,
  pub version: u32,
  pub content: Vec<AdfNode>,
}

#[derive(Debug, Serialize)]
pub struct AdfNode {
  pub r#type: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub content: Vec<AdfNode>,
}

impl AdfDocument {
  /// A document holding one paragraph of plain text
  pub fn paragraph(text: &str) -> Self {
    Self {
      r#type: "doc",
      version: 1,
      content: vec![AdfNode {
        r#type: "paragraph",
        text: None,
        content: vec![AdfNode {
          r#type: "text",
          text: Some(text.to_string()),
          content: Vec::new(),
        }],
      }],
    }
  }
}

/// Response body of a successful issue creation
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
  pub key: String,
}

/// Response body of `/rest/api/3/myself`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  pub account_id: String,
  pub display_name: Option<String>,
}

/// Represents an assignee change payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRequest {
  pub account_id: String,
}
