//! Constants for the bridge-llm client

/// User-Agent header value for the chat-completions client
pub const USER_AGENT: &str = concat!("jira-bridge/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Upper bound on generated tokens; a JQL query is short.
pub const MAX_TOKENS: u32 = 200;

/// Sampling temperature. Zero keeps translations deterministic.
pub const TEMPERATURE: f32 = 0.0;

/// Instruction sent ahead of the user's question.
pub const JQL_INSTRUCTION: &str = "Translate the following request into a Jira Query Language (JQL) query. \
Respond with only the JQL query: no commentary, no explanation, no code fences.";
