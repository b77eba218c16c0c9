use super::SheetOperations;
use super::formatting::header_format_rule;
use crate::config::GoogleConfig;
use crate::error::{AppError, Result};
use crate::models::row::HEADERS;
use crate::sheets::auth::create_and_verify_authenticator;
use async_trait::async_trait;
use google_sheets4::api::{
    BatchUpdateSpreadsheetRequest, ClearValuesRequest, Scope, Sheets, ValueRange,
};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::{debug, instrument};

// Full read/write access to the sink spreadsheet
pub(crate) const AUTH_SCOPE: Scope = Scope::Spreadsheet;

type SheetsHub = Sheets<HttpsConnector<HttpConnector>>;

pub struct SheetsClient {
    hub: SheetsHub,
    spreadsheet_id: String,
    sheet_id: i32,
    sheet_title: String,
}

impl SheetsClient {
    /// Create a new SheetsClient with authenticated access to the first
    /// worksheet of the configured spreadsheet
    #[instrument(name = "Authenticating to Google Sheets", skip_all)]
    pub async fn new(config: &GoogleConfig) -> Result<Self> {
        let auth = create_and_verify_authenticator(&config.service_account_file).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|e| AppError::Sheets(format!("Failed to load native TLS roots: {}", e)))?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);
        let hub = Sheets::new(client, auth);

        let (sheet_id, sheet_title) = Self::first_worksheet(&hub, &config.spreadsheet_id).await?;

        Ok(Self {
            hub,
            spreadsheet_id: config.spreadsheet_id.clone(),
            sheet_id,
            sheet_title,
        })
    }

    pub fn spreadsheet_url(&self) -> String {
        format!("https://docs.google.com/spreadsheets/d/{}", self.spreadsheet_id)
    }

    #[instrument(name = "Locating first worksheet", skip(hub))]
    async fn first_worksheet(hub: &SheetsHub, spreadsheet_id: &str) -> Result<(i32, String)> {
        let (_, spreadsheet) = hub
            .spreadsheets()
            .get(spreadsheet_id)
            .include_grid_data(false)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| {
                AppError::Sheets(format!(
                    "Failed to open spreadsheet '{}': {}",
                    spreadsheet_id, e
                ))
            })?;

        let properties = spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|sheet| sheet.properties)
            .ok_or_else(|| AppError::Sheets("Spreadsheet has no worksheets".to_string()))?;

        let sheet_id = properties
            .sheet_id
            .ok_or_else(|| AppError::Sheets("First worksheet has no sheet ID".to_string()))?;
        let title = properties.title.unwrap_or_default();

        debug!(sheet_id, title, "Found first worksheet");

        Ok((sheet_id, title))
    }

    /// Confirm read access by fetching the first cell, mirroring what a
    /// sync run will need before it touches any data.
    #[instrument(name = "Verifying sheet access", skip_all)]
    pub async fn verify_access(&self) -> Result<()> {
        let range = format!("'{}'!A1", self.sheet_title);
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, &range)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Cannot read sheet data: {}", e)))?;

        let first_cell = response
            .values
            .and_then(|rows| rows.into_iter().next())
            .and_then(|row| row.into_iter().next());
        debug!(?first_cell, "Sheet access confirmed");

        Ok(())
    }

    async fn apply_header_formatting(&self) -> Result<()> {
        let batch_update = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![header_format_rule(self.sheet_id)]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(batch_update, &self.spreadsheet_id)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to format header row: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl SheetOperations for SheetsClient {
    #[instrument(name = "Writing header row", skip_all)]
    async fn write_headers(&self) -> Result<()> {
        // Clear the entire sheet first
        let clear_range = format!("'{}'", self.sheet_title);
        self.hub
            .spreadsheets()
            .values_clear(ClearValuesRequest::default(), &self.spreadsheet_id, &clear_range)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to clear sheet: {}", e)))?;

        let header_row: Vec<serde_json::Value> = HEADERS
            .iter()
            .map(|h| serde_json::Value::String(h.to_string()))
            .collect();

        let data_range = format!("'{}'!A1", self.sheet_title);
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(data_range.clone()),
            values: Some(vec![header_row]),
        };

        self.hub
            .spreadsheets()
            .values_update(value_range, &self.spreadsheet_id, &data_range)
            .value_input_option("RAW")
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to write header row: {}", e)))?;

        self.apply_header_formatting().await?;

        Ok(())
    }

    #[instrument(name = "Reading sheet rows", skip_all)]
    async fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        // 55 columns span A through BC
        let range = format!("'{}'!A:BC", self.sheet_title);
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, &range)
            .major_dimension("ROWS")
            .value_render_option("FORMATTED_VALUE")
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to read sheet rows: {}", e)))?;

        let values = response.values.unwrap_or_default();
        Ok(values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect())
    }

    #[instrument(name = "Appending rows", skip_all, fields(count = rows.len()))]
    async fn append_rows(&self, rows: Vec<Vec<String>>) -> Result<()> {
        let values: Vec<Vec<serde_json::Value>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(serde_json::Value::String).collect())
            .collect();

        let range = format!("'{}'!A1", self.sheet_title);
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(range.clone()),
            values: Some(values),
        };

        self.hub
            .spreadsheets()
            .values_append(value_range, &self.spreadsheet_id, &range)
            .value_input_option("RAW")
            .insert_data_option("INSERT_ROWS")
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to append rows: {}", e)))?;

        Ok(())
    }
}

fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
