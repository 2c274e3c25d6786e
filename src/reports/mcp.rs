//! MCP server exposing the report registry tools.

use std::path::PathBuf;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router,
    transport::io::stdio,
};
use serde::{Deserialize, Serialize};

use super::lint::lint_report;
use super::resolve::ReportRegistry;

/// MCP server for the research report registry.
pub struct ReportMcpServer {
    registry: ReportRegistry,
    tool_router: ToolRouter<ReportMcpServer>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CheckReportInput {
    /// The topic or library name to search for (e.g., "acme_api", "authentication_system")
    pub topic: String,
    /// The current working directory (defaults to the process working directory)
    #[serde(default)]
    pub working_directory: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LintReportInput {
    /// Absolute path to the report directory to validate
    pub report_path: String,
}

#[tool_router]
impl ReportMcpServer {
    /// Create a new report registry MCP server.
    pub fn new(registry: ReportRegistry) -> Self {
        Self {
            registry,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Check if a research report exists for a given topic. Returns the report path if found, or suggests creating one if not found."
    )]
    async fn check_report_exists(
        &self,
        Parameters(input): Parameters<CheckReportInput>,
    ) -> Result<CallToolResult, McpError> {
        let working_dir = match input.working_directory {
            Some(dir) => PathBuf::from(dir),
            None => match std::env::current_dir() {
                Ok(cwd) => cwd,
                Err(e) => {
                    return Ok(CallToolResult::error(vec![Content::text(format!(
                        "Could not determine working directory: {}",
                        e
                    ))]));
                }
            },
        };

        match self.registry.check_report_exists(&input.topic, &working_dir) {
            Ok(result) => json_result(&result),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Report lookup failed: {}",
                e
            ))])),
        }
    }

    #[tool(
        description = "Validate the structure and formatting of a research report. Checks for required files, proper naming conventions, and metadata correctness."
    )]
    async fn lint_report(
        &self,
        Parameters(input): Parameters<LintReportInput>,
    ) -> Result<CallToolResult, McpError> {
        let result = lint_report(std::path::Path::new(&input.report_path));
        json_result(&result)
    }
}

/// Serialize a tool result object into JSON text content.
fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => Ok(CallToolResult::success(vec![Content::text(payload)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
            "Failed to serialize result: {}",
            e
        ))])),
    }
}

#[tool_handler]
impl ServerHandler for ReportMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "research-report-tools".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Research report registry - look up and validate structured research reports. \
                 Tools: check_report_exists, lint_report."
                    .to_string(),
            ),
        }
    }
}

/// Run the report registry MCP server over stdio.
pub async fn run(registry: ReportRegistry) -> Result<()> {
    let server = ReportMcpServer::new(registry);
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
