//! # Jira HTTP Client
//!
//! Every Jira call goes through [`JiraClient::call`], which attaches Basic
//! authentication and the fixed content-negotiation headers, and captures
//! non-success responses verbatim for diagnostics.

use bridge_core::{Credentials, response_body};
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, warn};

use crate::consts::{ACCEPT_JSON, ACCEPT_LANGUAGE_EN_US, USER_AGENT as USER_AGENT_VALUE};
use crate::error::JiraError;
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Perform an authenticated request and decode the JSON response.
  ///
  /// `query` pairs are percent-encoded onto the URL when non-empty. A body,
  /// when given, is sent as JSON with `Content-Type: application/json`. An
  /// empty success body decodes to `Value::Null`.
  pub async fn call(
    &self,
    method: Method,
    path: &str,
    query: &[(&str, &str)],
    body: Option<&Value>,
  ) -> Result<Value, JiraError> {
    let url = format!("{}{}", self.base_url, path);
    debug!(%method, %url, "Sending Jira request");

    let mut request = self
      .client
      .request(method.clone(), &url)
      .basic_auth(&self.auth.email, Some(&self.auth.api_token))
      .header(ACCEPT, ACCEPT_JSON)
      .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_EN_US)
      .header(USER_AGENT, USER_AGENT_VALUE);

    if !query.is_empty() {
      request = request.query(query);
    }
    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await.map_err(JiraError::Transport)?;
    let status = response.status();

    if !status.is_success() {
      let body = response_body(response.text().await);
      warn!(%method, %url, status = status.as_u16(), "Jira request failed");
      return Err(JiraError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
      });
    }

    let bytes = response.bytes().await.map_err(JiraError::Transport)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
      return Ok(Value::Null);
    }

    Ok(serde_json::from_slice(&bytes)?)
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(credentials: &Credentials) -> JiraClient {
  let auth = JiraAuth {
    email: credentials.email.clone(),
    api_token: credentials.api_token.clone(),
  };

  JiraClient::new(&credentials.base_url, auth)
}
