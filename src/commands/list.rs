//! List command - list known reports in both scopes.

use anyhow::{Context, Result};
use clap::Args;

use crate::reports::{
    self, ReportIndex, ReportRegistry, load_index, project_index_path,
};

#[derive(Args)]
pub struct ListCmd {
    /// Show only one scope (project or global)
    #[arg(long, short = 's')]
    pub scope: Option<String>,
}

impl ListCmd {
    pub async fn run(&self) -> Result<()> {
        let scope = match self.scope.as_deref() {
            None | Some("project") | Some("global") => self.scope.as_deref(),
            Some(other) => {
                anyhow::bail!("Invalid scope: {}. Use: project or global", other);
            }
        };

        let mut total = 0;

        if scope != Some("global") {
            let cwd = std::env::current_dir().context("Could not determine working directory")?;
            match reports::find_project_root(&cwd) {
                Some(root) => {
                    let index = load_index(&project_index_path(&root))?.unwrap_or_default();
                    println!("Project reports ({}):", root.display());
                    total += print_entries(&index);
                }
                None => println!("No project root found from {}.", cwd.display()),
            }
            println!();
        }

        if scope != Some("project") {
            let registry = ReportRegistry::from_config()?;
            let index = load_index(&registry.global_index_path())?.unwrap_or_default();
            println!("Global reports ({}):", registry.global_root().display());
            total += print_entries(&index);
            println!();
        }

        println!("{} reports", total);
        Ok(())
    }
}

fn print_entries(index: &ReportIndex) -> usize {
    if index.reports.is_empty() {
        println!("  (none)");
        return 0;
    }
    for entry in &index.reports {
        println!(
            "  {} ({})  updated {}",
            entry.topic, entry.directory, entry.updated
        );
    }
    index.reports.len()
}
