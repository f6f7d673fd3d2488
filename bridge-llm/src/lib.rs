//! # Language Model Client
//!
//! Minimal OpenAI-compatible chat-completions client. jira-bridge uses it for
//! one thing: turning a natural-language question into a JQL query.

mod client;
pub mod consts;
mod endpoints;
mod error;
pub mod models;

pub use client::{LanguageModelClient, create_language_model_client};
pub use endpoints::completions::jql_prompt;
pub use error::LanguageModelError;
