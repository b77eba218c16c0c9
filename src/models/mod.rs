pub mod enrichment;
pub mod lead;
pub mod row;

pub use enrichment::{EnrichedLead, Enrichment, GeoLocation};
pub use lead::Lead;
