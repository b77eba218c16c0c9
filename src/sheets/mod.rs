mod auth;
mod client;
mod formatting;

pub use client::SheetsClient;

use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SheetOperations {
    /// Replace the sheet's contents with the formatted 55-column header row.
    async fn write_headers(&self) -> Result<()>;

    /// Read every row (header included) as strings.
    async fn read_rows(&self) -> Result<Vec<Vec<String>>>;

    /// Append rows after the current contents in one batch.
    async fn append_rows(&self, rows: Vec<Vec<String>>) -> Result<()>;
}
