//! # Keyword JQL Heuristics
//!
//! Deterministic translation of common natural-language questions into JQL,
//! used when no language model is configured or it returns nothing.
//!
//! Rules are tested in table order against the lower-cased input and the
//! first match wins. A question can contain several cues ("my issues in
//! progress"), so the order is part of the contract.

/// A substring cue and the JQL it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
  /// Lower-case substring searched for in the question.
  pub cue: &'static str,
  /// JQL produced on a match. Empty means "match every issue".
  pub jql: &'static str,
  /// A phrasing that resolves through this rule, shown to users when a
  /// question cannot be understood.
  pub example: &'static str,
}

/// Keyword rules in priority order.
pub const KEYWORD_RULES: &[KeywordRule] = &[
  KeywordRule {
    cue: "i have now",
    jql: "assignee = currentUser() AND status != Done",
    example: "What issues do I have now?",
  },
  KeywordRule {
    cue: "my open issues",
    jql: "assignee = currentUser() AND status != Done",
    example: "Show my open issues",
  },
  KeywordRule {
    cue: "my issues",
    jql: "assignee = currentUser()",
    example: "List my issues",
  },
  KeywordRule {
    cue: "unassigned",
    jql: "assignee is EMPTY",
    example: "Which issues are unassigned?",
  },
  KeywordRule {
    cue: "assigned to me",
    jql: "assignee = currentUser()",
    example: "Issues assigned to me",
  },
  KeywordRule {
    cue: "do i have assigned",
    jql: "assignee = currentUser()",
    example: "What issues do I have assigned?",
  },
  KeywordRule {
    cue: "in progress",
    jql: "status = 'In Progress'",
    example: "What issues are in progress?",
  },
  KeywordRule {
    cue: "to do",
    jql: "status = 'To Do'",
    example: "What is still to do?",
  },
  KeywordRule {
    cue: "recently updated",
    jql: "updated >= -7d ORDER BY updated DESC",
    example: "Show recently updated issues",
  },
  KeywordRule {
    cue: "all issues",
    jql: "",
    example: "Show all issues",
  },
];

/// Return the first rule whose cue occurs in `question`, ignoring case.
pub fn match_keywords(question: &str) -> Option<&'static KeywordRule> {
  let lowered = question.to_lowercase();
  KEYWORD_RULES.iter().find(|rule| lowered.contains(rule.cue))
}

/// Quoted example phrasings, comma separated, for guidance messages.
pub fn example_phrasings() -> String {
  KEYWORD_RULES
    .iter()
    .map(|rule| format!("\"{}\"", rule.example))
    .collect::<Vec<_>>()
    .join(", ")
}
