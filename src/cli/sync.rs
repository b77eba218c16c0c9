use crate::error::Result;
use crate::runner::{RunController, RunOutcome};

pub(super) async fn execute() -> Result<RunOutcome> {
    let mut controller = RunController::new();
    Ok(controller.run().await)
}
