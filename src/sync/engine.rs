use crate::enrich::Enricher;
use crate::erp::ErpOperations;
use crate::error::Result;
use crate::models::EnrichedLead;
use crate::models::row::REQUEST_TOKEN_HEADER;
use crate::sheets::SheetOperations;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

pub struct SyncEngine<EC, SC> {
    erp: EC,
    sheets: SC,
    enricher: Enricher,
}

impl<EC, SC> SyncEngine<EC, SC>
where
    EC: ErpOperations + Sync,
    SC: SheetOperations + Sync,
{
    pub fn new(erp: EC, sheets: SC, enricher: Enricher) -> Self {
        Self {
            erp,
            sheets,
            enricher,
        }
    }

    /// Fetch, enrich, and append all leads whose request token is not yet
    /// in the sheet. Returns the number of rows appended.
    #[instrument(name = "Sync", skip_all)]
    pub async fn sync(&self) -> Result<usize> {
        let leads = self.erp.fetch_leads().await?;
        info!(count = leads.len(), "Fetched leads from ERP");

        let mut enriched = Vec::with_capacity(leads.len());
        for lead in leads {
            enriched.push(self.enricher.enrich(lead).await);
        }

        self.append_new(&enriched).await
    }

    async fn append_new(&self, leads: &[EnrichedLead]) -> Result<usize> {
        // A failed read degrades to an empty token set: the sync proceeds
        // optimistically rather than aborting before any write.
        let mut seen = match self.sheets.read_rows().await {
            Ok(rows) => {
                let tokens = existing_tokens(&rows);
                info!(existing = tokens.len(), "Read existing records from sheet");
                tokens
            }
            Err(e) => {
                warn!("Could not read existing rows, assuming empty sheet: {}", e);
                HashSet::new()
            }
        };

        let mut new_rows = Vec::new();
        for lead in leads {
            let token = &lead.lead.request_token;
            if seen.insert(token.clone()) {
                new_rows.push(lead.to_row());
            } else {
                debug!(token, "Skipping lead already present");
            }
        }

        if new_rows.is_empty() {
            info!("No new leads to append");
            return Ok(0);
        }

        let count = new_rows.len();
        self.sheets.append_rows(new_rows).await?;
        info!(count, "Appended new leads");

        Ok(count)
    }
}

/// Extract the set of request tokens from raw sheet rows, using the header
/// row to locate the token column. Missing header or column yields an
/// empty set.
fn existing_tokens(rows: &[Vec<String>]) -> HashSet<String> {
    let Some(header) = rows.first() else {
        return HashSet::new();
    };
    let Some(token_idx) = header.iter().position(|h| h == REQUEST_TOKEN_HEADER) else {
        return HashSet::new();
    };

    rows.iter()
        .skip(1)
        .filter_map(|row| row.get(token_idx))
        .filter(|token| !token.is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod mocks {
    use super::*;
    use crate::config::GeoConfig;
    use crate::enrich::GeoClient;
    use crate::error::AppError;
    use crate::models::Lead;
    use crate::models::row::HEADERS;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    pub(crate) struct MockErpClient {
        pub leads: Vec<Lead>,
    }

    #[async_trait]
    impl ErpOperations for MockErpClient {
        async fn fetch_leads(&self) -> Result<Vec<Lead>> {
            Ok(self.leads.clone())
        }
    }

    #[derive(Clone)]
    pub(crate) struct MockSheetsClient {
        pub rows: Arc<Mutex<Vec<Vec<String>>>>,
        pub appended: Arc<Mutex<Vec<Vec<String>>>>,
        pub fail_reads: bool,
    }

    impl MockSheetsClient {
        pub(crate) fn with_tokens(tokens: &[&str]) -> Self {
            let mut rows = vec![HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
            for token in tokens {
                let mut row = vec![String::new(); HEADERS.len()];
                row[30] = token.to_string();
                rows.push(row);
            }
            Self {
                rows: Arc::new(Mutex::new(rows)),
                appended: Arc::new(Mutex::new(Vec::new())),
                fail_reads: false,
            }
        }
    }

    #[async_trait]
    impl SheetOperations for MockSheetsClient {
        async fn write_headers(&self) -> Result<()> {
            let mut rows = self.rows.lock().unwrap();
            *rows = vec![HEADERS.iter().map(|h| h.to_string()).collect()];
            Ok(())
        }

        async fn read_rows(&self) -> Result<Vec<Vec<String>>> {
            if self.fail_reads {
                return Err(AppError::Sheets("read failed".to_string()));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn append_rows(&self, new_rows: Vec<Vec<String>>) -> Result<()> {
            self.rows.lock().unwrap().extend(new_rows.clone());
            self.appended.lock().unwrap().extend(new_rows);
            Ok(())
        }
    }

    pub(crate) fn engine_against(
        leads: Vec<Lead>,
        sheets: MockSheetsClient,
    ) -> SyncEngine<MockErpClient, MockSheetsClient> {
        // Mock leads carry ip "N/A", so the enricher never issues a lookup
        let enricher = Enricher::new(GeoClient::new(&GeoConfig::default()).unwrap());
        SyncEngine::new(MockErpClient { leads }, sheets, enricher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::mocks::{MockSheetsClient, engine_against};
    use crate::models::lead::test_helpers::mock_lead;

    #[test]
    fn test_existing_tokens_from_rows() {
        let sheets = MockSheetsClient::with_tokens(&["REQ1", "REQ2"]);
        let rows = sheets.rows.lock().unwrap().clone();

        let tokens = existing_tokens(&rows);
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("REQ1"));
        assert!(tokens.contains("REQ2"));
    }

    #[test]
    fn test_existing_tokens_empty_sheet() {
        assert!(existing_tokens(&[]).is_empty());
        // Header row without the token column
        assert!(existing_tokens(&[vec!["Foo".to_string()]]).is_empty());
    }

    #[tokio::test]
    async fn test_sync_skips_existing_and_batch_duplicates() {
        let leads = vec![mock_lead("A"), mock_lead("B"), mock_lead("B")];
        let sheets = MockSheetsClient::with_tokens(&["A"]);

        let engine = engine_against(leads, sheets.clone());
        let count = engine.sync().await.unwrap();

        assert_eq!(count, 1, "only the first B should be appended");
        let appended = sheets.appended.lock().unwrap();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0][30], "B");
    }

    #[tokio::test]
    async fn test_sync_is_idempotent() {
        let leads = vec![mock_lead("A"), mock_lead("B")];
        let sheets = MockSheetsClient::with_tokens(&[]);

        let engine = engine_against(leads, sheets.clone());
        assert_eq!(engine.sync().await.unwrap(), 2);
        assert_eq!(engine.sync().await.unwrap(), 0, "second run appends nothing");

        assert_eq!(sheets.appended.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_sync_proceeds_when_read_fails() {
        let leads = vec![mock_lead("A")];
        let mut sheets = MockSheetsClient::with_tokens(&["A"]);
        sheets.fail_reads = true;

        let engine = engine_against(leads, sheets.clone());
        let count = engine.sync().await.unwrap();

        assert_eq!(count, 1, "unreadable sheet is treated as empty");
    }

    #[tokio::test]
    async fn test_sync_appends_enriched_rows() {
        let leads = vec![mock_lead("A")];
        let sheets = MockSheetsClient::with_tokens(&[]);

        let engine = engine_against(leads, sheets.clone());
        engine.sync().await.unwrap();

        let appended = sheets.appended.lock().unwrap();
        let row = &appended[0];
        assert_eq!(row.len(), 55);
        // communications_count 1 + status "New Request" scores 6 - 1
        assert_eq!(row[45], "5");
        assert_eq!(row[46], "Response needed for new lead");
        assert_eq!(row[47], "N/A");
        assert_eq!(row[50], "No issues identified");
    }
}
