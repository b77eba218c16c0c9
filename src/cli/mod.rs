mod init_headers;
mod show;
mod sync;

use crate::error::Result;
use crate::runner::RunOutcome;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "tour-lead-sync")]
#[command(about = "Sync tour booking leads from the ERP to Google Sheets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Append log output to this file instead of the default state path
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<RunOutcome> {
        match &self.command {
            Commands::InitHeaders => init_headers::execute().await,
            Commands::Sync => sync::execute().await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the sheet contents with the formatted 55-column header row
    InitHeaders,
    /// Run one extract-enrich-sync pass against the sheet
    Sync,
    /// Show resolved paths
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}
