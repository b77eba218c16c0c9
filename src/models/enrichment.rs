use super::lead::Lead;
use chrono::{DateTime, Utc};

/// Derived fields appended to a lead before it is written to the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    /// Agent performance score, 1 to 10.
    pub agent_score: u8,
    pub agent_recommendation: String,
    pub geo: GeoLocation,
    /// Semicolon-joined tags, or "No issues identified".
    pub profitability: String,
    pub last_updated: DateTime<Utc>,
}

/// Resolved location for a client IP. Every field degrades to "N/A".
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub country: String,
    pub region: String,
    pub city: String,
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self {
            country: "N/A".to_string(),
            region: "N/A".to_string(),
            city: "N/A".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedLead {
    pub lead: Lead,
    pub enrichment: Enrichment,
}
