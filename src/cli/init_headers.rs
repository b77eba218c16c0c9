use crate::config::Config;
use crate::error::Result;
use crate::models::row::HEADERS;
use crate::runner::RunOutcome;
use crate::sheets::{SheetOperations, SheetsClient};
use tracing::{error, info};

pub(super) async fn execute() -> Result<RunOutcome> {
    // Errors are reported but leave the process on its normal exit path;
    // the sheet can be re-initialised on a later attempt.
    if let Err(e) = init_headers().await {
        error!("Failed to initialise headers: {}", e);
    }

    Ok(RunOutcome::Success)
}

async fn init_headers() -> Result<()> {
    let config = Config::load()?;
    let sheets = SheetsClient::new(&config.google).await?;

    sheets.write_headers().await?;

    info!(
        url = sheets.spreadsheet_url(),
        columns = HEADERS.len(),
        "Header row initialised"
    );

    Ok(())
}
