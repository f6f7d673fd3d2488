//! # Jira API Endpoints
//!
//! Typed wrappers over [`JiraClient::call`](crate::JiraClient::call) for the
//! handful of Jira REST v3 resources the bridge exposes.

pub mod issues;
pub mod projects;
pub mod search;
pub mod users;
