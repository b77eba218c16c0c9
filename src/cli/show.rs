use crate::config::Config;
use crate::error::Result;
use crate::runner::RunOutcome;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show configuration and log paths
    Paths,
}

impl ShowResource {
    pub async fn execute(&self) -> Result<RunOutcome> {
        match self {
            ShowResource::Paths => show_paths(),
        }
    }
}

fn show_paths() -> Result<RunOutcome> {
    let config_path = Config::config_file()?;
    let log_path = Config::state_file("sync.log")?;

    info!(path = ?config_path, "Config path");
    info!(path = ?log_path, "Log path");

    Ok(RunOutcome::Success)
}
