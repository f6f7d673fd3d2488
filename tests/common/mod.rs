//! Shared helpers for end-to-end tool tests.

#![allow(dead_code)]

use bridge_core::BridgeConfig;
use bridge_mcp::ServerContext;
use bridge_test_utils::{TEST_API_TOKEN, TEST_EMAIL, jira_lookup, lookup_from};
use serde_json::{Value, json};

pub const REMEDIATION: &str = "JIRA_BASE_URL, JIRA_API_TOKEN, and JIRA_EMAIL environment variables must be set.";

/// Context with Jira pointing at `jira_url` and no language model.
pub fn context_for(jira_url: &str) -> ServerContext {
  ServerContext::new(BridgeConfig::resolve(jira_lookup(jira_url)))
}

/// Context with both Jira and the language model configured.
pub fn context_with_language_model(jira_url: &str, model_url: &str) -> ServerContext {
  ServerContext::new(BridgeConfig::resolve(lookup_from(&[
    ("JIRA_BASE_URL", jira_url),
    ("JIRA_EMAIL", TEST_EMAIL),
    ("JIRA_API_TOKEN", TEST_API_TOKEN),
    ("OPENAI_API_KEY", "sk-test"),
    ("OPENAI_BASE_URL", model_url),
  ])))
}

/// A chat-completions response whose only choice says `content`.
pub fn completion(content: &str) -> Value {
  json!({
    "id": "chatcmpl-1",
    "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
  })
}
