//! # Chat-Completions HTTP Client
//!
//! HTTP client for an OpenAI-compatible chat-completions service,
//! authenticated with a bearer API key.

use bridge_core::LanguageModelSettings;
use reqwest::Client;

/// Represents a chat-completions API client
pub struct LanguageModelClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) api_key: String,
  pub(crate) model: String,
}

impl LanguageModelClient {
  /// Create a new client for `model` at `base_url`
  pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      api_key: api_key.to_string(),
      model: model.to_string(),
    }
  }

  pub fn model(&self) -> &str {
    &self.model
  }
}

/// Create a chat-completions client from resolved settings
pub fn create_language_model_client(settings: &LanguageModelSettings) -> LanguageModelClient {
  LanguageModelClient::new(&settings.base_url, &settings.api_key, &settings.model)
}
