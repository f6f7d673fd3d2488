//! Base URL normalization for the Jira site.
//!
//! Users paste site URLs in every shape imaginable (`acme.atlassian.net`,
//! `https://acme.atlassian.net/`, `HTTPS://acme.atlassian.net`). Endpoint
//! paths are appended verbatim, so the base must be canonical.

use url::{Position, Url};

use crate::config::ConfigError;

/// Render a parsed URL without a trailing slash.
fn strip_trailing_slash(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);
  result.push_str(url.path().trim_end_matches('/'));
  result
}

/// Normalize a Jira base URL.
///
/// A missing scheme defaults to `https://`. Only `http` and `https` are
/// accepted. Query strings and fragments are dropped.
pub fn normalize_base_url(input: &str) -> Result<String, ConfigError> {
  let trimmed = input.trim();
  let invalid = || ConfigError::InvalidBaseUrl {
    value: trimmed.to_string(),
  };

  if trimmed.is_empty() {
    return Err(invalid());
  }

  let candidate = if trimmed.contains("://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).map_err(|_| invalid())?;
  if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
    return Err(invalid());
  }

  Ok(strip_trailing_slash(&url))
}
