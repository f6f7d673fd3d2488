//! Environment variable management for testing
//!
//! Most code in the workspace takes an injected variable lookup, so tests
//! rarely need to touch the real environment. When they do, [`EnvVarGuard`]
//! restores the original value on drop.

use std::collections::HashMap;
use std::env;

/// RAII guard for a single process environment variable
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Capture the current value of `name` so it can be restored later
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

/// Build a variable lookup backed by fixed name/value pairs
pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + Clone + use<> {
  let vars: HashMap<String, String> = pairs
    .iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect();
  move |name: &str| vars.get(name).cloned()
}
