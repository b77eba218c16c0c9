mod sample;

pub use sample::SampleSource;

use crate::error::Result;
use crate::models::Lead;
use async_trait::async_trait;

/// Source of lead records. The production extraction endpoint is not wired
/// up yet; `SampleSource` stands in behind the same seam.
#[async_trait]
pub trait ErpOperations {
    async fn fetch_leads(&self) -> Result<Vec<Lead>>;
}
