use super::ErpOperations;
use crate::error::{AppError, Result};
use crate::models::Lead;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::prelude::dec;
use tracing::instrument;
use url::Url;

/// Synthetic one-lead batch with a timestamp-derived request token, so
/// repeated runs within the same second deduplicate and later runs append.
pub struct SampleSource;

#[async_trait]
impl ErpOperations for SampleSource {
    #[instrument(name = "Fetching leads", skip_all)]
    async fn fetch_leads(&self) -> Result<Vec<Lead>> {
        Ok(vec![sample_lead(Utc::now())?])
    }
}

fn sample_lead(now: DateTime<Utc>) -> Result<Lead> {
    let ts = now.timestamp();
    let lead_url = Url::parse(&format!("https://erp.example.com/leads/{ts}"))
        .map_err(|e| AppError::Erp(format!("Failed to build lead URL: {}", e)))?;

    Ok(Lead {
        row_number: (ts % 1000) as u32,
        hub: "tours.example.com".to_string(),
        client_name: format!("Test Client {}", now.format("%H:%M")),
        nationality: "Test Country".to_string(),
        email: "test@example.com".to_string(),
        operator: "Example Tours".to_string(),
        file_status: "Active".to_string(),
        arrival: (now + Duration::days(60)).date_naive(),
        departure: (now + Duration::days(67)).date_naive(),
        pax: "2".to_string(),
        lead_operation: "Lead".to_string(),
        request_channel: "Website".to_string(),
        communication: "Email".to_string(),
        medium: "Online".to_string(),
        offered_income: dec!(1000.00),
        offered_income_usd: dec!(1000.00),
        actual_paid_amount: dec!(0.00),
        actual_paid_amount_usd: dec!(0.00),
        remaining_payment: dec!(1000.00),
        remaining_payment_usd: dec!(1000.00),
        submission_date: now,
        confirmation_date: None,
        company: "Example Tours".to_string(),
        department: "Corporate Sales".to_string(),
        product_title: "Sample Tour Package".to_string(),
        utm_campaign: "sample_campaign".to_string(),
        initial_price: dec!(1000.00),
        device_type: "Desktop".to_string(),
        client_phone: "+1-555-0123".to_string(),
        file_no: format!("FN{ts}"),
        request_token: format!("REQ{ts}"),
        sales_person: "Test Agent".to_string(),
        request_status: "New Request".to_string(),
        source: "Website".to_string(),
        vip_status: false,
        loyalty_program: "Fresh Customer".to_string(),
        group_booking: false,
        has_int_flight: false,
        single_room: 0,
        double_room: 1,
        triple_room: 0,
        family_room: 0,
        int_flight_amount: dec!(0),
        int_flight_currency: "USD".to_string(),
        agent_group_discount: dec!(0),
        communications_count: 1,
        lead_id: format!("LD{ts}"),
        lead_url,
        ip_address: "8.8.8.8".to_string(),
    })
}
