//! Check command - does a report exist for a topic?

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::reports::ReportRegistry;

#[derive(Args)]
pub struct CheckCmd {
    /// Topic or library name to look up
    pub topic: String,

    /// Working directory to resolve the project scope from (default: current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

impl CheckCmd {
    pub async fn run(&self) -> Result<()> {
        let registry = ReportRegistry::from_config()?;

        let working_dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Could not determine working directory")?,
        };

        let result = registry.check_report_exists(&self.topic, &working_dir)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!("{}", result.message);
        if let Some(path) = &result.report_path {
            println!("  path:    {}", path.display());
        }
        if let Some(created) = &result.created {
            println!("  created: {}", created);
        }
        if let Some(updated) = &result.updated {
            println!("  updated: {}", updated);
        }

        Ok(())
    }
}
