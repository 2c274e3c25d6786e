//! Lint command - validate a report directory's structure.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::reports::lint::lint_report;

#[derive(Args)]
pub struct LintCmd {
    /// Path to the report directory to validate
    pub report_path: PathBuf,

    /// Print the raw JSON result
    #[arg(long)]
    pub json: bool,
}

impl LintCmd {
    pub async fn run(&self) -> Result<()> {
        let result = lint_report(&self.report_path);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            for error in &result.errors {
                println!("error: {}", error);
            }
            for warning in &result.warnings {
                println!("warning: {}", warning);
            }
            for fix in &result.fixes {
                println!("note: {}", fix);
            }
            println!("{}", result.message);
        }

        if !result.valid {
            std::process::exit(1);
        }

        Ok(())
    }
}
