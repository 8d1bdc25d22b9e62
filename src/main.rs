//! Composition root of the `shift-payroll` job.
//!
//! Sets up logging, reads the environment, builds the Notion client and runs
//! the payroll pipeline once.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shift_payroll::config::{DEFAULT_LOG_LEVEL, Settings, log_filter};
use shift_payroll::error::SyncResult;
use shift_payroll::models::RunSummary;
use shift_payroll::notion::NotionClient;
use shift_payroll::payroll::{JobContext, run};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match execute().await {
        Ok(summary) => {
            if summary.stopped_early() {
                info!(
                    shift_id = summary.stopped_at_shift.as_deref().unwrap_or_default(),
                    "Run ended at a shift without staff"
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Payroll calculation failed");
            ExitCode::FAILURE
        }
    }
}

async fn execute() -> SyncResult<RunSummary> {
    let settings = Settings::from_env()?;
    let client = NotionClient::from_settings(&settings)?;
    let ctx = JobContext::from(&settings);
    run(&client, &ctx).await
}

fn init_logging() {
    let filter = log_filter(|name| std::env::var(name).ok());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .init();
}
