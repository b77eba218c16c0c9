mod geo;
pub mod profitability;
pub mod scorer;

pub use geo::GeoClient;

use crate::models::{EnrichedLead, Enrichment, Lead};
use chrono::Utc;
use tracing::debug;

/// Derives the enrichment fields for each lead: agent score, IP
/// geolocation, and profitability tags. Every step degrades to a safe
/// default instead of failing, so enrichment itself cannot abort a run.
pub struct Enricher {
    geo: GeoClient,
}

impl Enricher {
    pub fn new(geo: GeoClient) -> Self {
        Self { geo }
    }

    pub async fn enrich(&self, lead: Lead) -> EnrichedLead {
        let (agent_score, agent_recommendation) =
            scorer::score_agent(lead.communications_count, &lead.request_status);
        let geo = self.geo.resolve(&lead.ip_address).await;
        let profitability = profitability::check(&lead);

        debug!(
            client = %lead.client_name,
            agent_score,
            %profitability,
            "Lead enriched"
        );

        EnrichedLead {
            enrichment: Enrichment {
                agent_score,
                agent_recommendation,
                geo,
                profitability,
                last_updated: Utc::now(),
            },
            lead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeoConfig;
    use crate::models::lead::test_helpers::mock_lead;

    fn enricher() -> Enricher {
        // Leads in these tests carry ip "N/A", so no lookup is issued
        Enricher::new(GeoClient::new(&GeoConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn test_enrich_scores_and_tags() {
        let lead = mock_lead("tok_1");
        let enriched = enricher().enrich(lead).await;

        // communications_count 1 + status "New Request"
        assert_eq!(enriched.enrichment.agent_score, 5);
        assert_eq!(
            enriched.enrichment.agent_recommendation,
            "Response needed for new lead"
        );
        assert_eq!(enriched.enrichment.profitability, "No issues identified");
        assert_eq!(enriched.enrichment.geo.country, "N/A");
    }

    #[tokio::test]
    async fn test_enrich_keeps_lead_intact() {
        let lead = mock_lead("tok_1");
        let expected = lead.clone();
        let enriched = enricher().enrich(lead).await;

        assert_eq!(enriched.lead, expected);
    }
}
