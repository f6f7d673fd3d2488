use reqwest::Method;

use crate::client::JiraClient;
use crate::consts::MYSELF_PATH;
use crate::error::JiraError;
use crate::models::JiraUser;

impl JiraClient {
  /// Get the account the credentials belong to
  pub async fn get_current_user(&self) -> Result<JiraUser, JiraError> {
    let value = self.call(Method::GET, MYSELF_PATH, &[], None).await?;
    Ok(serde_json::from_value(value)?)
  }
}

#[cfg(test)]
mod tests {
  use bridge_test_utils::{TEST_API_TOKEN, TEST_EMAIL};
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::error::JiraError;
  use crate::models::JiraAuth;

  fn test_client(base_url: &str) -> JiraClient {
    let auth = JiraAuth {
      email: TEST_EMAIL.to_string(),
      api_token: TEST_API_TOKEN.to_string(),
    };
    JiraClient::new(base_url, auth)
  }

  #[tokio::test]
  async fn test_get_current_user() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/3/myself"))
      .and(basic_auth(TEST_EMAIL, TEST_API_TOKEN))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "accountId": "5b10a2844c20165700ede21g",
          "displayName": "Test User",
          "emailAddress": "test@example.com"
      })))
      .mount(&mock_server)
      .await;

    let user = client.get_current_user().await?;
    assert_eq!(user.account_id, "5b10a2844c20165700ede21g");
    assert_eq!(user.display_name.as_deref(), Some("Test User"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_current_user_unauthorized() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/3/myself"))
      .respond_with(ResponseTemplate::new(401).set_body_string("Client must be authenticated"))
      .mount(&mock_server)
      .await;

    let error = client.get_current_user().await.unwrap_err();
    assert!(matches!(error, JiraError::Status { status: 401, .. }));
    assert!(error.to_string().contains("Client must be authenticated"));
  }
}
