use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR_PREFIX: &str = "tour-lead-sync";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub google: GoogleConfig,
    #[serde(default)]
    pub geolocation: GeoConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GoogleConfig {
    /// Path to the service-account JSON key used for the Sheets API.
    pub service_account_file: PathBuf,
    pub spreadsheet_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeoConfig {
    #[serde(default = "default_geo_base_url")]
    pub base_url: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            base_url: default_geo_base_url(),
        }
    }
}

fn default_geo_base_url() -> String {
    "https://ipapi.co".to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file()?;

        if !config_path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found at {:?}. Please create one.",
                config_path
            )));
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?;

        if config.google.service_account_file.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Google service_account_file must be set in config file".to_string(),
            ));
        }

        if config.google.spreadsheet_id.is_empty() {
            return Err(AppError::Config(
                "Google spreadsheet_id must be set in config file".to_string(),
            ));
        }

        Ok(config)
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf> {
        let xdg_dirs = Self::xdg_dirs();
        xdg_dirs
            .place_config_file("config.toml")
            .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))
    }

    /// Get a state file path (log files live here)
    pub fn state_file(filename: &str) -> Result<PathBuf> {
        let xdg = Self::xdg_dirs();
        xdg.place_state_file(filename)
            .map_err(|e| AppError::Config(format!("Failed to create state file path: {}", e)))
    }
}
