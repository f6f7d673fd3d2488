//! Shared server context available to all tool handlers.

use bridge_core::{BridgeConfig, ConfigError, Credentials};
use bridge_jira::{JiraClient, create_jira_client};

use crate::query::QueryResolver;
use crate::types::ToolFailure;

/// Configuration resolved at startup plus the lazily built Jira client.
pub struct ServerContext {
  jira: Result<Credentials, ConfigError>,
  resolver: QueryResolver,

  /// Built on the first Jira call.
  jira_client: tokio::sync::OnceCell<JiraClient>,
}

impl ServerContext {
  pub fn new(config: BridgeConfig) -> Self {
    let resolver = QueryResolver::from_settings(config.language_model.as_ref());
    Self::with_resolver(config.jira, resolver)
  }

  pub fn with_resolver(jira: Result<Credentials, ConfigError>, resolver: QueryResolver) -> Self {
    Self {
      jira,
      resolver,
      jira_client: tokio::sync::OnceCell::new(),
    }
  }

  pub fn resolver(&self) -> &QueryResolver {
    &self.resolver
  }

  /// Return the Jira client, or the configuration error when credentials
  /// were missing at startup.
  pub async fn get_jira_client(&self) -> Result<&JiraClient, ToolFailure> {
    let credentials = self.jira.as_ref().map_err(|e| ToolFailure::MissingConfiguration(e.clone()))?;

    Ok(
      self
        .jira_client
        .get_or_init(|| async { create_jira_client(credentials) })
        .await,
    )
  }
}
