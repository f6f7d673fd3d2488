//! Natural-language query resolution.
//!
//! A [`QueryResolver`] holds an ordered chain of strategies. The first
//! strategy that produces a filter wins. A language-model failure is logged
//! and treated as "no opinion", so the keyword table always gets its turn.

use bridge_core::{LanguageModelSettings, match_keywords};
use bridge_llm::{LanguageModelClient, create_language_model_client};
use thiserror::Error;
use tracing::{debug, warn};

/// Where a resolved filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
  LanguageModel,
  Keywords,
}

/// A JQL filter and the strategy that produced it. An empty `jql` selects
/// every issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
  pub jql: String,
  pub source: ResolutionSource,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no strategy could translate the question into JQL")]
pub struct Unresolved;

/// One way of turning a question into JQL.
pub enum QueryStrategy {
  LanguageModel(LanguageModelClient),
  Keywords,
}

impl QueryStrategy {
  async fn resolve(&self, question: &str) -> Option<Resolution> {
    match self {
      Self::LanguageModel(client) => match client.translate_to_jql(question).await {
        Ok(Some(jql)) => Some(Resolution {
          jql,
          source: ResolutionSource::LanguageModel,
        }),
        Ok(None) => {
          debug!(model = client.model(), "Language model returned no JQL");
          None
        }
        Err(e) => {
          warn!(model = client.model(), error = %e, "Language model translation failed, falling back");
          None
        }
      },
      Self::Keywords => match_keywords(question).map(|rule| Resolution {
        jql: rule.jql.to_string(),
        source: ResolutionSource::Keywords,
      }),
    }
  }

  pub const fn source(&self) -> ResolutionSource {
    match self {
      Self::LanguageModel(_) => ResolutionSource::LanguageModel,
      Self::Keywords => ResolutionSource::Keywords,
    }
  }
}

pub struct QueryResolver {
  chain: Vec<QueryStrategy>,
}

impl QueryResolver {
  pub fn new(chain: Vec<QueryStrategy>) -> Self {
    Self { chain }
  }

  /// The language model (when configured) followed by the keyword table.
  pub fn from_settings(settings: Option<&LanguageModelSettings>) -> Self {
    let mut chain = Vec::with_capacity(2);
    if let Some(settings) = settings {
      chain.push(QueryStrategy::LanguageModel(create_language_model_client(settings)));
    }
    chain.push(QueryStrategy::Keywords);
    Self::new(chain)
  }

  pub fn strategies(&self) -> &[QueryStrategy] {
    &self.chain
  }

  pub async fn resolve(&self, question: &str) -> Result<Resolution, Unresolved> {
    for strategy in &self.chain {
      if let Some(resolution) = strategy.resolve(question).await {
        return Ok(resolution);
      }
    }
    Err(Unresolved)
  }
}
