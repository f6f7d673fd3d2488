//! # Result Projection
//!
//! Renders issue and project records as the plain-text lines returned by the
//! MCP tools. One line per record, input order preserved, and a fixed
//! sentinel per listing kind when there is nothing to show.

use std::fmt::Display;

use crate::consts::{NO_ISSUES_FOUND, NO_PROJECTS_FOUND, UNKNOWN_FIELD};

/// Read-only projection of a tracker issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
  pub key: String,
  pub summary: String,
  pub status: Option<String>,
}

/// Read-only projection of a tracker project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
  pub key: String,
  pub name: String,
}

/// Line layout used for issue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLayout {
  /// `Key: {key}, Summary: {summary}`
  Summary,
  /// `Key: {key}, Summary: {summary}, Status: {status}`
  SummaryWithStatus,
}

/// Render `records` line by line, or `sentinel` when there are none.
pub fn project<T, F>(records: &[T], sentinel: &str, render: F) -> String
where
  F: Fn(&T) -> String,
{
  if records.is_empty() {
    return sentinel.to_string();
  }

  records.iter().map(render).collect::<Vec<_>>().join("\n")
}

pub fn project_issues(issues: &[IssueSummary], layout: IssueLayout) -> String {
  project(issues, NO_ISSUES_FOUND, |issue| match layout {
    IssueLayout::Summary => format!("Key: {}, Summary: {}", issue.key, issue.summary),
    IssueLayout::SummaryWithStatus => format!(
      "Key: {}, Summary: {}, Status: {}",
      issue.key,
      issue.summary,
      issue.status.as_deref().unwrap_or(UNKNOWN_FIELD)
    ),
  })
}

pub fn project_projects(projects: &[ProjectSummary]) -> String {
  project(projects, NO_PROJECTS_FOUND, |p| format!("Key: {}, Name: {}", p.key, p.name))
}

/// Text for an error response body, or a marker when it could not be read.
///
/// An unreadable body must not render the same as an empty one.
pub fn response_body<E: Display>(body: Result<String, E>) -> String {
  body.unwrap_or_else(|e| format!("<body unavailable: {e}>"))
}
