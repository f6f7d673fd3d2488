//! Errors returned by the chat-completions client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanguageModelError {
  #[error("HTTP {status}: {body}")]
  Status { status: u16, body: String },
  #[error("Request to language model failed: {0}")]
  Transport(#[from] reqwest::Error),
}
