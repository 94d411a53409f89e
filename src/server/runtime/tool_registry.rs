use std::sync::Arc;

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ErrorData, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};

use crate::{
    render::BuiltinRenderer,
    server::{auth::AccessPolicy, config::ServerConfig},
    tools::{self, Dispatcher},
};

/// MCP server handler exposing the cow rendering tools.
///
/// Holds only immutable state; clones share the dispatcher, so concurrent
/// sessions and invocations need no coordination.
#[derive(Clone)]
pub struct CowsayServer {
    instructions: Arc<String>,
    dispatcher: Arc<Dispatcher>,
}

impl CowsayServer {
    pub fn new(config: ServerConfig, shared_token: Option<String>, instructions: String) -> Self {
        let renderer = Arc::new(BuiltinRenderer::new(config.render.wrap_width));
        // Launch-time token wins over the configured one; the permissive
        // policy decides what to accept.
        let token = shared_token.or(config.auth.token);
        let dispatcher = Dispatcher::new(renderer, config.render, AccessPolicy::new(token));
        Self {
            instructions: Arc::new(instructions),
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn tool_count(&self) -> usize {
        tools::descriptors().len()
    }
}

impl ServerHandler for CowsayServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "cowsay-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: tools::tools(),
            ..ListToolsResult::default()
        })
    }

    /// Route every call through the dispatcher. Unknown tools and invalid
    /// arguments come back as error envelopes, never as protocol faults.
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request.arguments.unwrap_or_default();
        Ok(self.dispatcher.invoke(&request.name, args).await)
    }
}
