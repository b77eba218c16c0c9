use super::enrichment::EnrichedLead;

/// Header of the column holding the deduplication key.
pub const REQUEST_TOKEN_HEADER: &str = "Request Token";

/// Sheet columns, left to right, mirroring the ERP report's filter layout
/// with the ten enrichment columns appended. `EnrichedLead::to_row` must
/// stay in lockstep with this order.
pub const HEADERS: [&str; 55] = [
    "#",
    "Hub",
    "Client Name",
    "Nationality",
    "Email",
    "Operator",
    "File Status",
    "Arrival",
    "Departure",
    "Pax",
    "Lead / Operation",
    "Request Channel",
    "Communication",
    "Medium",
    "Offered Income",
    "Offered Income (USD)",
    "Actual Paid Amount",
    "Actual Paid Amount (USD)",
    "Remaining Payment",
    "Remaining Payment (USD)",
    "Submission Date",
    "Confirmation Date",
    "Company",
    "Department",
    "Product Title",
    "UTM Campaign",
    "Initial Price",
    "Device Type",
    "Client Phone",
    "File No",
    REQUEST_TOKEN_HEADER,
    "Sales Person",
    "Request Status",
    "Source",
    "VIP Status",
    "Loyalty Program",
    "Group",
    "Has Int. Flight",
    "Single Room",
    "Double Room",
    "Triple Room",
    "Family Room",
    "Int.Flight Amount",
    "Int.Flight Currency",
    "Agent / Group Discount",
    "Agent Score",
    "Agent Recommendation",
    "IP Country",
    "IP State/Region",
    "IP City",
    "Profitability Flag",
    "Communication Count",
    "Last Updated",
    "Lead ID",
    "Lead URL",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl EnrichedLead {
    /// Build the positional 55-cell row for this lead, in `HEADERS` order.
    pub fn to_row(&self) -> Vec<String> {
        let lead = &self.lead;
        let enrichment = &self.enrichment;

        vec![
            lead.row_number.to_string(),
            lead.hub.clone(),
            lead.client_name.clone(),
            lead.nationality.clone(),
            lead.email.clone(),
            lead.operator.clone(),
            lead.file_status.clone(),
            lead.arrival.format(DATE_FORMAT).to_string(),
            lead.departure.format(DATE_FORMAT).to_string(),
            lead.pax.clone(),
            lead.lead_operation.clone(),
            lead.request_channel.clone(),
            lead.communication.clone(),
            lead.medium.clone(),
            lead.offered_income.to_string(),
            lead.offered_income_usd.to_string(),
            lead.actual_paid_amount.to_string(),
            lead.actual_paid_amount_usd.to_string(),
            lead.remaining_payment.to_string(),
            lead.remaining_payment_usd.to_string(),
            lead.submission_date.format(DATETIME_FORMAT).to_string(),
            match &lead.confirmation_date {
                Some(date) => date.format(DATETIME_FORMAT).to_string(),
                None => "N/A".to_string(),
            },
            lead.company.clone(),
            lead.department.clone(),
            lead.product_title.clone(),
            lead.utm_campaign.clone(),
            lead.initial_price.to_string(),
            lead.device_type.clone(),
            lead.client_phone.clone(),
            lead.file_no.clone(),
            lead.request_token.clone(),
            lead.sales_person.clone(),
            lead.request_status.clone(),
            lead.source.clone(),
            yes_no(lead.vip_status),
            lead.loyalty_program.clone(),
            yes_no(lead.group_booking),
            yes_no(lead.has_int_flight),
            lead.single_room.to_string(),
            lead.double_room.to_string(),
            lead.triple_room.to_string(),
            lead.family_room.to_string(),
            lead.int_flight_amount.to_string(),
            lead.int_flight_currency.clone(),
            lead.agent_group_discount.to_string(),
            enrichment.agent_score.to_string(),
            enrichment.agent_recommendation.clone(),
            enrichment.geo.country.clone(),
            enrichment.geo.region.clone(),
            enrichment.geo.city.clone(),
            enrichment.profitability.clone(),
            lead.communications_count.to_string(),
            enrichment.last_updated.format(DATETIME_FORMAT).to_string(),
            lead.lead_id.clone(),
            lead.lead_url.to_string(),
        ]
    }
}

fn yes_no(value: bool) -> String {
    match value {
        true => "Yes".to_string(),
        false => "No".to_string(),
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::super::enrichment::{EnrichedLead, Enrichment, GeoLocation};
    use crate::models::lead::test_helpers::{mock_lead, mock_submission_date};

    pub(crate) fn mock_enriched_lead(token: &str) -> EnrichedLead {
        EnrichedLead {
            lead: mock_lead(token),
            enrichment: Enrichment {
                agent_score: 5,
                agent_recommendation: "Response needed for new lead".to_string(),
                geo: GeoLocation::default(),
                profitability: "No issues identified".to_string(),
                last_updated: mock_submission_date(),
            },
        }
    }
}
