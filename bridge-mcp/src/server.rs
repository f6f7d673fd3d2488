//! MCP server implementation with all tool handlers.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use crate::context::ServerContext;
use crate::tools::jira::{AssignToMeParams, CreateIssueParams, FetchIssuesParams, QueryIssuesParams};
use crate::types::ToolResult;

#[derive(Clone)]
pub struct JiraBridgeServer {
  context: Arc<ServerContext>,
  tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JiraBridgeServer {
  pub fn new(context: ServerContext) -> Self {
    let context = Arc::new(context);
    Self {
      context,
      tool_router: Self::tool_router(),
    }
  }

  // =========================================================================
  // Read tools
  // =========================================================================

  #[tool(
    name = "fetch-issues",
    description = "Fetch Jira issues matching a JQL query",
    annotations(read_only_hint = true)
  )]
  pub async fn fetch_issues(&self, params: Parameters<FetchIssuesParams>) -> Result<CallToolResult, McpError> {
    Ok(ToolResult::capture(self.context.fetch_issues(&params.0).await).into())
  }

  #[tool(
    name = "query-issues",
    description = "Find Jira issues by asking a question in plain English",
    annotations(read_only_hint = true)
  )]
  pub async fn query_issues(&self, params: Parameters<QueryIssuesParams>) -> Result<CallToolResult, McpError> {
    Ok(ToolResult::capture(self.context.query_issues(&params.0).await).into())
  }

  #[tool(
    name = "list-projects",
    description = "List Jira projects visible to the configured account",
    annotations(read_only_hint = true, idempotent_hint = true)
  )]
  pub async fn list_projects(&self) -> Result<CallToolResult, McpError> {
    Ok(ToolResult::capture(self.context.list_projects().await).into())
  }

  // =========================================================================
  // Write tools
  // =========================================================================

  #[tool(name = "create-issue", description = "Create a new Jira issue")]
  pub async fn create_issue(&self, params: Parameters<CreateIssueParams>) -> Result<CallToolResult, McpError> {
    Ok(ToolResult::capture(self.context.create_issue(&params.0).await).into())
  }

  #[tool(
    name = "assign-to-me",
    description = "Assign a Jira issue to the configured account",
    annotations(idempotent_hint = true)
  )]
  pub async fn assign_to_me(&self, params: Parameters<AssignToMeParams>) -> Result<CallToolResult, McpError> {
    Ok(ToolResult::capture(self.context.assign_to_me(&params.0).await).into())
  }
}

#[tool_handler]
impl ServerHandler for JiraBridgeServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      instructions: Some(
        "Jira bridge. Search issues with JQL or plain-English questions, list projects, \
         create issues and assign issues to yourself."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      ..Default::default()
    }
  }
}
