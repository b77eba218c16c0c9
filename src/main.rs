mod cli;
mod config;
mod enrich;
mod erp;
mod error;
mod logging;
mod models;
mod prereq;
mod runner;
mod sheets;
mod sync;

use clap::Parser;

use crate::cli::Cli;
use crate::runner::RunOutcome;
use tracing::error;

// The markers below are the scheduler contract: exactly one of SUCCESS,
// FAILED, or FATAL_ERROR on stdout, with exit status 0 only for SUCCESS.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
        println!("FATAL_ERROR");
        std::process::exit(1);
    }

    match cli.run().await {
        Ok(RunOutcome::Success) => println!("SUCCESS"),
        Ok(RunOutcome::Failed) => {
            println!("FAILED");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            println!("FATAL_ERROR");
            std::process::exit(1);
        }
    }
}
