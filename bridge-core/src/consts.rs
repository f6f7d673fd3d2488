//! Core constants shared across jira-bridge components.

/// Environment variable holding the Jira site URL (e.g. `https://acme.atlassian.net`).
pub const ENV_JIRA_BASE_URL: &str = "JIRA_BASE_URL";
/// Environment variable holding the Atlassian account email.
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";
/// Environment variable holding the Atlassian API token.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Environment variable enabling natural-language translation through a
/// chat-completions service.
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding the chat-completions service root.
pub const ENV_OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the chat-completions model.
pub const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Issue type used by `create-issue` when the caller does not name one.
pub const DEFAULT_ISSUE_TYPE: &str = "Task";

/// JQL used by `fetch-issues` when the caller passes an empty filter.
pub const DEFAULT_JQL: &str = "assignee = currentUser()";

pub const NO_ISSUES_FOUND: &str = "No issues found.";
pub const NO_PROJECTS_FOUND: &str = "No projects found.";

/// Placeholder rendered for optional fields the tracker did not return.
pub const UNKNOWN_FIELD: &str = "Unknown";
