//! # Jira API Client
//!
//! Jira REST v3 integration for jira-bridge: an authenticated request
//! primitive plus typed helpers for searching, creating and assigning issues,
//! listing projects and identifying the current account.

mod client;
pub mod consts;
mod endpoints;
mod error;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use error::JiraError;
// Re-export models
pub use models::{JiraAuth, JiraUser, NewIssue};
// Re-export the HTTP method type used by `JiraClient::call`
pub use reqwest::Method;
