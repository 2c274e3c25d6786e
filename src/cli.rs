//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{CheckCmd, ConfigCmd, LintCmd, ListCmd, McpCmd};

#[derive(Parser)]
#[command(name = "reports")]
#[command(about = "Reports - research report registry and linting")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether a report exists for a topic
    Check(CheckCmd),

    /// Validate the structure of a report directory
    Lint(LintCmd),

    /// List known reports in the project and global indexes
    List(ListCmd),

    /// Run as MCP server (for AI tools)
    Mcp(McpCmd),

    /// Manage configuration (global reports root)
    Config(ConfigCmd),
}

impl Command {
    pub async fn execute(&self) -> anyhow::Result<()> {
        match self {
            Command::Check(cmd) => cmd.run().await,
            Command::Lint(cmd) => cmd.run().await,
            Command::List(cmd) => cmd.run().await,
            Command::Mcp(cmd) => cmd.run().await,
            Command::Config(cmd) => cmd.run().await,
        }
    }
}
