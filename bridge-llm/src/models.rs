use serde::{Deserialize, Serialize};

/// Request body of `/v1/chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
  pub model: String,
  pub messages: Vec<ChatMessage>,
  pub max_tokens: u32,
  pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
  pub role: String,
  /// Absent on some refusal and tool-call responses
  #[serde(default)]
  pub content: Option<String>,
}

impl ChatMessage {
  pub fn user(content: &str) -> Self {
    Self {
      role: "user".to_string(),
      content: Some(content.to_string()),
    }
  }
}

/// Response body of `/v1/chat/completions`
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
  #[serde(default)]
  pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
  pub message: ChatMessage,
}

impl ChatCompletionResponse {
  /// Trimmed text of the first choice, if it has any
  pub fn first_text(&self) -> Option<String> {
    self
      .choices
      .first()
      .and_then(|choice| choice.message.content.as_deref())
      .map(str::trim)
      .filter(|text| !text.is_empty())
      .map(str::to_string)
  }
}
