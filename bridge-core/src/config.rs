//! # Bridge Configuration
//!
//! Resolves the Jira credentials and the optional language-model settings
//! from a variable lookup. The server builds one [`BridgeConfig`] at startup
//! and hands it to every component that needs it.
//!
//! Lookups are injected as `Fn(&str) -> Option<String>` so resolution can be
//! exercised without touching the process environment.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::consts::{
  DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, ENV_JIRA_API_TOKEN, ENV_JIRA_BASE_URL, ENV_JIRA_EMAIL,
  ENV_OPENAI_API_KEY, ENV_OPENAI_BASE_URL, ENV_OPENAI_MODEL,
};
use crate::url::normalize_base_url;

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// At least one of the required Jira variables is absent or blank. Always
  /// names all three so the remediation text never changes.
  #[error("{}, {}, and {} environment variables must be set.", .names[0], .names[1], .names[2])]
  MissingCredentials { names: [&'static str; 3] },
  #[error("{ENV_JIRA_BASE_URL} is not a valid http(s) URL: '{value}'")]
  InvalidBaseUrl { value: String },
}

impl ConfigError {
  pub const fn missing_credentials() -> Self {
    Self::MissingCredentials {
      names: [ENV_JIRA_BASE_URL, ENV_JIRA_API_TOKEN, ENV_JIRA_EMAIL],
    }
  }
}

/// Read a variable, trimming whitespace and treating blank values as unset.
fn read_trimmed<F>(lookup: &F, name: &str) -> Option<String>
where
  F: Fn(&str) -> Option<String>,
{
  lookup(name)
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty())
}

/// Jira account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  pub base_url: String,
  pub email: String,
  pub api_token: String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("base_url", &self.base_url)
      .field("email", &self.email)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

impl Credentials {
  /// Resolve credentials from `lookup`. Partial presence counts as absence.
  pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_url = read_trimmed(&lookup, ENV_JIRA_BASE_URL);
    let email = read_trimmed(&lookup, ENV_JIRA_EMAIL);
    let api_token = read_trimmed(&lookup, ENV_JIRA_API_TOKEN);

    match (base_url, email, api_token) {
      (Some(base_url), Some(email), Some(api_token)) => Ok(Self {
        base_url: normalize_base_url(&base_url)?,
        email,
        api_token,
      }),
      _ => Err(ConfigError::missing_credentials()),
    }
  }

  /// Resolve credentials from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::resolve(|name| std::env::var(name).ok())
  }
}

/// Settings for the chat-completions service used to translate natural
/// language into JQL.
#[derive(Clone, PartialEq, Eq)]
pub struct LanguageModelSettings {
  pub api_key: String,
  pub base_url: String,
  pub model: String,
}

impl fmt::Debug for LanguageModelSettings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LanguageModelSettings")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .finish()
  }
}

impl LanguageModelSettings {
  /// Returns `None` when no API key is configured.
  pub fn resolve<F>(lookup: F) -> Option<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key = read_trimmed(&lookup, ENV_OPENAI_API_KEY)?;
    let base_url = read_trimmed(&lookup, ENV_OPENAI_BASE_URL)
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
    let model = read_trimmed(&lookup, ENV_OPENAI_MODEL).unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());

    Some(Self {
      api_key,
      base_url,
      model,
    })
  }
}

/// Everything the server needs, resolved once at startup.
///
/// Missing Jira credentials do not prevent the server from starting; every
/// tool reports the configuration error instead.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
  pub jira: Result<Credentials, ConfigError>,
  pub language_model: Option<LanguageModelSettings>,
}

impl BridgeConfig {
  pub fn resolve<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let jira = Credentials::resolve(&lookup);
    let language_model = LanguageModelSettings::resolve(&lookup);

    debug!(
      jira_configured = jira.is_ok(),
      language_model_configured = language_model.is_some(),
      "Resolved bridge configuration"
    );

    Self { jira, language_model }
  }

  pub fn from_env() -> Self {
    Self::resolve(|name| std::env::var(name).ok())
  }
}
