//! Stdio tool server
//!
//! Exposes the integration as the single MCP tool `add_uxcam_android` over
//! stdin/stdout. Each call runs the whole integration synchronously.

pub mod tool;

use crate::config::ProjectLayout;
use crate::error::GraftError;
use crate::operations::IntegrateOperation;
use crate::system::System;
use anyhow::Result;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::transport::stdio;
use rmcp::{ServerHandler, ServiceExt as _};
use std::sync::Arc;
use tracing::{debug, info};

/// MCP handler wrapping the integration of one project
#[derive(Clone)]
pub struct UxcamServer {
    system: Arc<dyn System>,
    layout: ProjectLayout,
}

impl UxcamServer {
    #[must_use]
    pub fn new(system: Arc<dyn System>, layout: ProjectLayout) -> Self {
        Self { system, layout }
    }

    fn operation(&self) -> IntegrateOperation<'_> {
        IntegrateOperation::new(self.layout.clone(), self.system.as_ref())
    }

    /// Dispatch a tool call by name
    ///
    /// # Errors
    ///
    /// Returns invalid params for an unknown tool or bad arguments, and an
    /// internal error when the integration fails on I/O
    pub fn call(&self, request: &CallToolRequestParams) -> Result<CallToolResult, ErrorData> {
        debug!("Tool call: {}", request.name);
        if request.name != tool::TOOL_NAME {
            return Err(ErrorData::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ));
        }
        tool::call(&self.operation(), request.arguments.as_ref())
    }
}

impl ServerHandler for UxcamServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::default()
            },
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(vec![tool::descriptor()])))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        std::future::ready(self.call(&request))
    }
}

/// Serve `server` over stdin/stdout until the client disconnects
///
/// # Errors
///
/// Returns a protocol error if the handshake fails or the service task aborts
pub async fn serve_stdio(server: UxcamServer) -> Result<()> {
    info!("Serving {} over stdio", tool::TOOL_NAME);
    let service = server
        .serve(stdio())
        .await
        .map_err(|e| GraftError::protocol(format!("MCP handshake failed: {e}")))?;
    let reason = service
        .waiting()
        .await
        .map_err(|e| GraftError::protocol(format!("MCP service stopped unexpectedly: {e}")))?;
    debug!("Server stopped: {reason:?}");
    Ok(())
}
