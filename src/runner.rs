use crate::config::Config;
use crate::enrich::{Enricher, GeoClient};
use crate::erp::SampleSource;
use crate::error::{AppError, Result};
use crate::prereq;
use crate::sheets::SheetsClient;
use crate::sync::SyncEngine;
use tracing::{debug, error, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    PrereqsOk,
    SheetsReady,
    DataSynced,
    Done,
    Failed,
}

/// Terminal result of one invocation, mapped to the process exit contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failed,
}

/// Drives one sync invocation through its stages in order. A failure at
/// any stage halts the run; no stage is re-attempted.
pub struct RunController {
    state: RunState,
}

impl RunController {
    pub fn new() -> Self {
        Self {
            state: RunState::Init,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    #[instrument(name = "Sync run", skip_all)]
    pub async fn run(&mut self) -> RunOutcome {
        info!("Starting lead sync run");

        match self.execute().await {
            Ok(appended) => {
                self.transition(RunState::Done);
                info!(appended, "Sync run completed");
                RunOutcome::Success
            }
            Err(e) => {
                self.transition(RunState::Failed);
                error!("Sync run failed: {}", e);
                RunOutcome::Failed
            }
        }
    }

    async fn execute(&mut self) -> Result<usize> {
        let config = Config::load()?;

        if !prereq::check(&config).await {
            return Err(AppError::Prereq(
                "prerequisite checks did not pass".to_string(),
            ));
        }
        self.transition(RunState::PrereqsOk);

        let sheets = SheetsClient::new(&config.google).await?;
        sheets.verify_access().await?;
        let url = sheets.spreadsheet_url();
        self.transition(RunState::SheetsReady);

        let enricher = Enricher::new(GeoClient::new(&config.geolocation)?);
        let engine = SyncEngine::new(SampleSource, sheets, enricher);
        let appended = engine.sync().await?;
        self.transition(RunState::DataSynced);

        info!(url, "Sheet up to date");

        Ok(appended)
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "Run state transition");
        self.state = next;
    }
}

impl Default for RunController {
    fn default() -> Self {
        Self::new()
    }
}
