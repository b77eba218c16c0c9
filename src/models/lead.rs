use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use url::Url;

/// One booking/inquiry record as extracted from the ERP.
///
/// `request_token` is the ERP's unique identifier and the deduplication key
/// for the sheet; `lead_id` is a secondary internal identifier. Fields are
/// validated into their concrete types at the extraction boundary so that
/// enrichment and row building never fall back to untyped lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub row_number: u32,
    pub hub: String,
    pub client_name: String,
    pub nationality: String,
    pub email: String,
    pub operator: String,
    pub file_status: String,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    /// Free text in the ERP: usually a head count, sometimes "solo".
    pub pax: String,
    pub lead_operation: String,
    pub request_channel: String,
    pub communication: String,
    pub medium: String,
    pub offered_income: Decimal,
    pub offered_income_usd: Decimal,
    pub actual_paid_amount: Decimal,
    pub actual_paid_amount_usd: Decimal,
    pub remaining_payment: Decimal,
    pub remaining_payment_usd: Decimal,
    pub submission_date: DateTime<Utc>,
    pub confirmation_date: Option<DateTime<Utc>>,
    pub company: String,
    pub department: String,
    pub product_title: String,
    pub utm_campaign: String,
    pub initial_price: Decimal,
    pub device_type: String,
    pub client_phone: String,
    pub file_no: String,
    pub request_token: String,
    pub sales_person: String,
    pub request_status: String,
    pub source: String,
    pub vip_status: bool,
    pub loyalty_program: String,
    pub group_booking: bool,
    pub has_int_flight: bool,
    pub single_room: u32,
    pub double_room: u32,
    pub triple_room: u32,
    pub family_room: u32,
    pub int_flight_amount: Decimal,
    pub int_flight_currency: String,
    pub agent_group_discount: Decimal,
    pub communications_count: u32,
    pub lead_id: String,
    pub lead_url: Url,
    /// Client IP as recorded by the ERP, "N/A" when unknown.
    pub ip_address: String,
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::prelude::dec;

    pub(crate) fn mock_submission_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    pub(crate) fn mock_lead(token: &str) -> Lead {
        Lead {
            row_number: 1,
            hub: "tours.example.com".to_string(),
            client_name: format!("mock lead: {token}"),
            nationality: "Test Country".to_string(),
            email: "test@example.com".to_string(),
            operator: "Example Tours".to_string(),
            file_status: "Active".to_string(),
            arrival: NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
            departure: NaiveDate::from_ymd_opt(2025, 10, 22).unwrap(),
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
            submission_date: mock_submission_date(),
            confirmation_date: None,
            company: "Example Tours".to_string(),
            department: "Corporate Sales".to_string(),
            product_title: "Sample Tour Package".to_string(),
            utm_campaign: "sample_campaign".to_string(),
            initial_price: dec!(1000.00),
            device_type: "Desktop".to_string(),
            client_phone: "+1-555-0123".to_string(),
            file_no: format!("FN-{token}"),
            request_token: token.to_string(),
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
            lead_id: format!("LD-{token}"),
            lead_url: Url::parse(&format!("https://erp.example.com/leads/{token}")).unwrap(),
            ip_address: "N/A".to_string(),
        }
    }
}
