//! Config command - manage registry configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::reports::{self, RegistryConfig};

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub command: ConfigSubCmd,
}

#[derive(Subcommand)]
pub enum ConfigSubCmd {
    /// Set the global reports root (default: ~/.claude/research_reports/_global)
    SetGlobalRoot(SetGlobalRootCmd),

    /// Show current configuration
    Show,
}

#[derive(Args)]
pub struct SetGlobalRootCmd {
    /// Directory holding the global index.json and report directories
    pub path: PathBuf,
}

impl ConfigCmd {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            ConfigSubCmd::SetGlobalRoot(cmd) => {
                let mut config = RegistryConfig::load()?;
                config.global_root = Some(cmd.path.clone());
                config.save()?;
                println!("Global reports root set to: {}", cmd.path.display());
            }
            ConfigSubCmd::Show => {
                let config = RegistryConfig::load()?;
                println!("Config: {}", RegistryConfig::config_path()?.display());
                println!();
                match &config.global_root {
                    Some(root) => println!("global_root: {}", root.display()),
                    None => match reports::default_global_root() {
                        Some(root) => println!("global_root: {} (default)", root.display()),
                        None => println!("global_root: (not set, home directory unavailable)"),
                    },
                }
            }
        }
        Ok(())
    }
}
