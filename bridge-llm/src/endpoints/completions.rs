use bridge_core::response_body;
use reqwest::header::USER_AGENT;
use tracing::{debug, instrument};

use crate::client::LanguageModelClient;
use crate::consts::{CHAT_COMPLETIONS_PATH, JQL_INSTRUCTION, MAX_TOKENS, TEMPERATURE, USER_AGENT as USER_AGENT_VALUE};
use crate::error::LanguageModelError;
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Build the single user message sent for a translation
pub fn jql_prompt(question: &str) -> String {
  format!("{JQL_INSTRUCTION}\n\nRequest: {question}")
}

impl LanguageModelClient {
  /// Send one user message and return the first choice's trimmed text.
  ///
  /// `Ok(None)` means the service answered but produced no usable text.
  #[instrument(skip(self, prompt), level = "debug")]
  pub async fn complete(&self, prompt: &str) -> Result<Option<String>, LanguageModelError> {
    let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);
    let request = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![ChatMessage::user(prompt)],
      max_tokens: MAX_TOKENS,
      temperature: TEMPERATURE,
    };

    let response = self
      .client
      .post(&url)
      .bearer_auth(&self.api_key)
      .header(USER_AGENT, USER_AGENT_VALUE)
      .json(&request)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      return Err(LanguageModelError::Status {
        status: status.as_u16(),
        body: response_body(response.text().await),
      });
    }

    let completion = response.json::<ChatCompletionResponse>().await?;
    Ok(completion.first_text())
  }

  /// Translate a natural-language question into JQL
  pub async fn translate_to_jql(&self, question: &str) -> Result<Option<String>, LanguageModelError> {
    let jql = self.complete(&jql_prompt(question)).await?;
    debug!(model = %self.model, ?jql, "Language model translation");
    Ok(jql)
  }
}
