//! jira-bridge: MCP server exposing Jira issue search, creation and assignment.

use anyhow::Result;
use bridge_core::BridgeConfig;
use bridge_mcp::{JiraBridgeServer, ServerContext};
use clap::{ArgAction, Parser};
use rmcp::ServiceExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "MCP server for searching, creating and assigning Jira issues")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // stdout carries the JSON-RPC stream, so logs go to stderr.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let config = BridgeConfig::from_env();
  if let Err(e) = &config.jira {
    warn!("{e} Every tool will report this until the server is restarted.");
  }
  if config.language_model.is_none() {
    info!("OPENAI_API_KEY not set, query-issues will use keyword matching only");
  }

  let server = JiraBridgeServer::new(ServerContext::new(config));

  let service = server.serve(rmcp::transport::io::stdio()).await?;
  service.waiting().await?;

  Ok(())
}
