//! Constants for the bridge-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jira-bridge/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Every Jira call asks for JSON in US English so error bodies are stable.
pub const ACCEPT_JSON: &str = "application/json";
pub const ACCEPT_LANGUAGE_EN_US: &str = "en-US";

pub const SEARCH_PATH: &str = "/rest/api/3/search";
pub const ISSUE_PATH: &str = "/rest/api/3/issue";
pub const PROJECT_SEARCH_PATH: &str = "/rest/api/3/project/search";
pub const MYSELF_PATH: &str = "/rest/api/3/myself";
