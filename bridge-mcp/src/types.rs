//! Result envelope and failure taxonomy for bridge tools.
//!
//! Every tool answers with exactly one text block. Handlers return
//! `Result<String, ToolFailure>` and [`ToolResult::capture`] turns either
//! side into the envelope, so no failure ever reaches the transport as a
//! protocol error.

use bridge_core::{ConfigError, example_phrasings};
use bridge_jira::JiraError;
use rmcp::model::{CallToolResult, Content};
use thiserror::Error;
use tracing::warn;

use crate::query::Unresolved;

/// Everything that can stop a tool from producing its normal output.
#[derive(Debug, Error)]
pub enum ToolFailure {
  /// Required Jira variables are absent. Rendered verbatim.
  #[error(transparent)]
  MissingConfiguration(#[from] ConfigError),
  /// Jira answered with a non-success status.
  #[error("{context}: {source}")]
  RemoteRequest {
    context: String,
    #[source]
    source: JiraError,
  },
  #[error("Sorry, I couldn't understand your query. Try phrasing it like one of these: {}", example_phrasings())]
  TranslationUnresolved,
  #[error("Invalid input: {0}")]
  InvalidInput(String),
  /// Network failures, malformed JSON and anything else unplanned.
  #[error("{context}: {source}")]
  Unexpected {
    context: String,
    #[source]
    source: JiraError,
  },
}

impl ToolFailure {
  /// Classify a Jira client error under `context`.
  pub fn jira(context: impl Into<String>, source: JiraError) -> Self {
    let context = context.into();
    match source {
      JiraError::Status { .. } => Self::RemoteRequest { context, source },
      _ => Self::Unexpected { context, source },
    }
  }

  /// Machine-readable code, used for logging.
  pub const fn code(&self) -> &'static str {
    match self {
      Self::MissingConfiguration(_) => "missing_configuration",
      Self::RemoteRequest { .. } => "remote_request",
      Self::TranslationUnresolved => "translation_unresolved",
      Self::InvalidInput(_) => "invalid_input",
      Self::Unexpected { .. } => "unexpected",
    }
  }
}

impl From<Unresolved> for ToolFailure {
  fn from(_: Unresolved) -> Self {
    Self::TranslationUnresolved
  }
}

/// The `{ text }` envelope every tool returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
  pub text: String,
  pub is_error: bool,
}

impl ToolResult {
  pub fn success(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      is_error: false,
    }
  }

  /// Convert a handler outcome into an envelope. Never fails.
  pub fn capture(outcome: Result<String, ToolFailure>) -> Self {
    match outcome {
      Ok(text) => Self::success(text),
      Err(failure) => {
        warn!(code = failure.code(), "{failure}");
        Self {
          text: failure.to_string(),
          is_error: true,
        }
      }
    }
  }
}

impl From<ToolResult> for CallToolResult {
  fn from(result: ToolResult) -> Self {
    let content = vec![Content::text(result.text)];
    if result.is_error {
      CallToolResult::error(content)
    } else {
      CallToolResult::success(content)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_capture_success() {
    let result = ToolResult::capture(Ok("Key: A-1, Summary: one".to_string()));
    assert_eq!(result, ToolResult::success("Key: A-1, Summary: one"));
  }

  #[test]
  fn test_capture_missing_configuration_is_verbatim() {
    let result = ToolResult::capture(Err(ConfigError::missing_credentials().into()));
    assert!(result.is_error);
    assert_eq!(
      result.text,
      "JIRA_BASE_URL, JIRA_API_TOKEN, and JIRA_EMAIL environment variables must be set."
    );
  }

  #[test]
  fn test_capture_remote_failure_keeps_status_and_body() {
    let failure = ToolFailure::jira(
      "Failed to list projects",
      JiraError::Status {
        status: 404,
        status_text: "Not Found".to_string(),
        body: "not found".to_string(),
      },
    );
    assert_eq!(failure.code(), "remote_request");

    let result = ToolResult::capture(Err(failure));
    insta::assert_snapshot!(result.text, @"Failed to list projects: HTTP 404 Not Found. Details: not found");
  }

  #[test]
  fn test_capture_decode_failure_is_unexpected() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let failure = ToolFailure::jira("Failed to list projects", JiraError::Json(source));
    assert_eq!(failure.code(), "unexpected");
    assert!(failure.to_string().starts_with("Failed to list projects: Invalid JSON"));
  }

  #[test]
  fn test_unresolved_text_lists_phrasings() {
    let text = ToolFailure::from(Unresolved).to_string();
    assert!(text.starts_with("Sorry, I couldn't understand your query."));
    assert!(text.contains("\"What issues do I have assigned?\""));
    assert!(text.contains("\"What issues are in progress?\""));
  }

  #[test]
  fn test_into_call_tool_result_marks_errors() {
    let ok: CallToolResult = ToolResult::success("done").into();
    assert_eq!(ok.is_error, Some(false));

    let failed: CallToolResult = ToolResult::capture(Err(ToolFailure::InvalidInput("x".into()))).into();
    assert_eq!(failed.is_error, Some(true));
    assert_eq!(failed.content.len(), 1);
  }
}
