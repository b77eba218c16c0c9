use crate::config::Config;
use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging for this invocation: console output mirrored to an
/// append-only log file (default: the XDG state path). Returns the
/// resolved log file path.
pub fn init(log_file: Option<&Path>) -> Result<PathBuf> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => Config::state_file("sync.log")?,
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to initialise logging: {}", e)))?;

    Ok(path)
}
