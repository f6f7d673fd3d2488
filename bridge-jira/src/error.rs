//! Errors returned by the Jira client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JiraError {
  /// The server answered outside the 2xx range. The body is kept verbatim
  /// and never parsed.
  #[error("HTTP {status} {status_text}. Details: {body}")]
  Status {
    status: u16,
    status_text: String,
    body: String,
  },
  #[error("Request to Jira failed: {0}")]
  Transport(#[source] reqwest::Error),
  #[error("Invalid JSON in Jira exchange: {0}")]
  Json(#[from] serde_json::Error),
}

impl JiraError {
  /// HTTP status for `Status` errors.
  pub const fn status(&self) -> Option<u16> {
    match self {
      Self::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}
