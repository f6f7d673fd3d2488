//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations: creating issues
//! and changing their assignee.

use reqwest::Method;
use url::form_urlencoded;

use crate::client::JiraClient;
use crate::consts::ISSUE_PATH;
use crate::error::JiraError;
use crate::models::{AssigneeRequest, CreateIssueRequest, CreatedIssue, NewIssue};

/// Percent-encode `value` so it stays a single URL path segment.
///
/// `byte_serialize` writes spaces as `+` and escapes a literal `+`, so every
/// remaining `+` is a space.
fn path_segment(value: &str) -> String {
  form_urlencoded::byte_serialize(value.as_bytes())
    .collect::<String>()
    .replace('+', "%20")
}

impl JiraClient {
  /// Create an issue and return its key
  pub async fn create_issue(&self, issue: NewIssue) -> Result<String, JiraError> {
    let payload = serde_json::to_value(CreateIssueRequest::from(issue))?;

    let value = self.call(Method::POST, ISSUE_PATH, &[], Some(&payload)).await?;
    let created: CreatedIssue = serde_json::from_value(value)?;
    Ok(created.key)
  }

  /// Assign an issue to the given account. Jira answers 204 on success.
  pub async fn assign_issue(&self, issue_key: &str, account_id: &str) -> Result<(), JiraError> {
    let url_path = format!("{ISSUE_PATH}/{}/assignee", path_segment(issue_key));
    let payload = serde_json::to_value(AssigneeRequest {
      account_id: account_id.to_string(),
    })?;

    self.call(Method::PUT, &url_path, &[], Some(&payload)).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use bridge_test_utils::{TEST_API_TOKEN, TEST_EMAIL};
  use serde_json::json;
  use wiremock::matchers::{basic_auth, body_json, body_partial_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::path_segment;
  use crate::client::JiraClient;
  use crate::error::JiraError;
  use crate::models::{JiraAuth, NewIssue};

  fn test_client(base_url: &str) -> JiraClient {
    let auth = JiraAuth {
      email: TEST_EMAIL.to_string(),
      api_token: TEST_API_TOKEN.to_string(),
    };
    JiraClient::new(base_url, auth)
  }

  fn new_issue(description: Option<&str>) -> NewIssue {
    NewIssue {
      project_key: "PROJ".to_string(),
      summary: "Fix bug".to_string(),
      description: description.map(str::to_string),
      issue_type: "Task".to_string(),
    }
  }

  #[tokio::test]
  async fn test_create_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue"))
      .and(basic_auth(TEST_EMAIL, TEST_API_TOKEN))
      .and(body_json(json!({
          "fields": {
              "project": { "key": "PROJ" },
              "summary": "Fix bug",
              "issuetype": { "name": "Task" }
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": "10042",
          "key": "PROJ-42",
          "self": "https://test.atlassian.net/rest/api/3/issue/10042"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let key = client.create_issue(new_issue(None)).await?;
    assert_eq!(key, "PROJ-42");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_with_description_sends_adf() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue"))
      .and(body_partial_json(json!({
          "fields": {
              "description": {
                  "type": "doc",
                  "version": 1,
                  "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": "Crashes on save" }] }]
              }
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "key": "PROJ-43" })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let key = client.create_issue(new_issue(Some("Crashes on save"))).await?;
    assert_eq!(key, "PROJ-43");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_invalid_project() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue"))
      .respond_with(
        ResponseTemplate::new(400).set_body_string(r#"{"errors":{"project":"valid project is required"}}"#),
      )
      .mount(&mock_server)
      .await;

    let error = client.create_issue(new_issue(None)).await.unwrap_err();
    assert!(matches!(error, JiraError::Status { status: 400, .. }));
    assert!(error.to_string().contains("valid project is required"));
  }

  #[tokio::test]
  async fn test_assign_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/PROJ-7/assignee"))
      .and(basic_auth(TEST_EMAIL, TEST_API_TOKEN))
      .and(body_json(json!({ "accountId": "abc-123" })))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.assign_issue("PROJ-7", "abc-123").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_assign_issue_not_found() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/NOPE-1/assignee"))
      .respond_with(ResponseTemplate::new(404).set_body_string("Issue does not exist"))
      .mount(&mock_server)
      .await;

    let error = client.assign_issue("NOPE-1", "abc-123").await.unwrap_err();
    assert_eq!(error.status(), Some(404));
  }

  #[test]
  fn test_path_segment_escapes_delimiters() {
    assert_eq!(path_segment("PROJ-7"), "PROJ-7");
    assert_eq!(path_segment("PROJ-1?x"), "PROJ-1%3Fx");
    assert_eq!(path_segment("PROJ-1#frag"), "PROJ-1%23frag");
    assert_eq!(path_segment("PROJ-1/../../myself"), "PROJ-1%2F..%2F..%2Fmyself");
    assert_eq!(path_segment("a b+c"), "a%20b%2Bc");
  }

  #[tokio::test]
  async fn test_assign_issue_keeps_key_in_one_segment() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/PROJ-1%3Fx/assignee"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("PUT"))
      .and(path("/rest/api/3/issue/PROJ-1%2F..%2F..%2Fmyself/assignee"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.assign_issue("PROJ-1?x", "abc").await?;
    client.assign_issue("PROJ-1/../../myself", "abc").await?;

    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
    for request in &requests {
      assert_eq!(request.url.query(), None);
      assert!(request.url.path().starts_with("/rest/api/3/issue/PROJ-1%"));
    }

    Ok(())
  }
}
