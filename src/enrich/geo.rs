use crate::config::GeoConfig;
use crate::error::{AppError, Result};
use crate::models::GeoLocation;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the per-IP geolocation endpoint (`{base}/{ip}/json/`).
pub struct GeoClient {
    client: reqwest::Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    country_name: Option<String>,
    region: Option<String>,
    city: Option<String>,
}

impl GeoClient {
    pub fn new(config: &GeoConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("Invalid geolocation base URL: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Geo(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Resolve an IP to a location. Unknown IPs, lookup failures, and
    /// malformed responses all degrade to the all-"N/A" default; this
    /// never fails the caller.
    #[instrument(name = "Resolving IP geolocation", skip_all, fields(ip))]
    pub async fn resolve(&self, ip: &str) -> GeoLocation {
        if ip.is_empty() || ip == "N/A" {
            return GeoLocation::default();
        }

        match self.lookup(ip).await {
            Ok(location) => {
                debug!(?location, "Geolocation resolved");
                location
            }
            Err(e) => {
                warn!(ip, "Geolocation lookup failed: {}", e);
                GeoLocation::default()
            }
        }
    }

    async fn lookup(&self, ip: &str) -> Result<GeoLocation> {
        let url = self
            .base_url
            .join(&format!("{}/json/", ip))
            .map_err(|e| AppError::Geo(format!("Invalid lookup URL for '{}': {}", ip, e)))?;

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Geo(format!(
                "Lookup for '{}' returned status {}",
                ip,
                response.status()
            )));
        }

        let body: GeoResponse = response.json().await?;
        let na = || "N/A".to_string();

        Ok(GeoLocation {
            country: body.country_name.unwrap_or_else(na),
            region: body.region.unwrap_or_else(na),
            city: body.city.unwrap_or_else(na),
        })
    }
}
