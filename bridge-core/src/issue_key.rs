//! # Issue Key Validation
//!
//! Issue keys end up in URL paths, so only the two shapes Jira accepts are
//! let through: a project key followed by a number (`PROJ-123`) or a bare
//! numeric issue id (`10042`).

use std::sync::LazyLock;

use regex::Regex;

static ISSUE_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[A-Za-z][A-Za-z0-9_]*-\d+|\d+)$").expect("Failed to compile issue key regex")
});

/// Whether `value` is a Jira issue key or numeric issue id.
pub fn is_issue_key(value: &str) -> bool {
  ISSUE_KEY_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accepts_keys_and_ids() {
    for key in ["PROJ-123", "ME-1", "proj-9", "A1_B-42", "10042"] {
      assert!(is_issue_key(key), "{key}");
    }
  }

  #[test]
  fn test_rejects_path_and_query_delimiters() {
    for key in [
      "PROJ-1?x",
      "PROJ-1#frag",
      "PROJ-1/../../myself",
      "PROJ-1/assignee",
      "PROJ 1",
      "PROJ-",
      "-1",
      "1PROJ-2",
      "",
    ] {
      assert!(!is_issue_key(key), "{key}");
    }
  }
}
