//! Canned credentials and Jira payloads for HTTP tests

use serde_json::{Value, json};

use crate::env::lookup_from;

pub const TEST_EMAIL: &str = "test_user";
pub const TEST_API_TOKEN: &str = "test_token";
/// `Authorization` header value for [`TEST_EMAIL`]:[`TEST_API_TOKEN`]
pub const TEST_BASIC_AUTH: &str = "Basic dGVzdF91c2VyOnRlc3RfdG9rZW4=";

/// A variable lookup with all three Jira values pointing at `base_url`
pub fn jira_lookup(base_url: &str) -> impl Fn(&str) -> Option<String> + Clone + use<> {
  lookup_from(&[
    ("JIRA_BASE_URL", base_url),
    ("JIRA_EMAIL", TEST_EMAIL),
    ("JIRA_API_TOKEN", TEST_API_TOKEN),
  ])
}

/// An issue record as returned by `/rest/api/3/search`
pub fn issue_json(key: &str, summary: &str, status: Option<&str>) -> Value {
  let mut fields = json!({ "summary": summary });
  if let Some(status) = status {
    fields["status"] = json!({ "name": status });
  }
  json!({
    "id": "10000",
    "key": key,
    "fields": fields,
  })
}

/// A project record as returned by `/rest/api/3/project/search`
pub fn project_json(key: &str, name: &str) -> Value {
  json!({
    "id": "10000",
    "key": key,
    "name": name,
  })
}
