//! # Bridge Core
//!
//! Shared building blocks for jira-bridge: configuration resolution, the
//! keyword JQL heuristics and plain-text projection of tracker records.
//! Nothing in this crate performs network I/O.

pub mod config;
pub mod consts;
pub mod issue_key;
pub mod keywords;
pub mod output;
pub mod url;

pub use config::{BridgeConfig, ConfigError, Credentials, LanguageModelSettings};
pub use issue_key::is_issue_key;
pub use keywords::{KEYWORD_RULES, KeywordRule, example_phrasings, match_keywords};
pub use output::{IssueLayout, IssueSummary, ProjectSummary, project, project_issues, project_projects, response_body};
