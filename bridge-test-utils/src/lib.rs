//! Test utilities shared across the jira-bridge workspace
//!
//! This crate provides common testing infrastructure including:
//! - Process environment isolation ([`EnvVarGuard`])
//! - Injected variable lookups ([`lookup_from`])
//! - Canned Jira credentials and payloads ([`fixtures`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

// Re-export commonly used items
pub use env::{EnvVarGuard, lookup_from};
pub use fixtures::{TEST_API_TOKEN, TEST_BASIC_AUTH, TEST_EMAIL, issue_json, jira_lookup, project_json};
