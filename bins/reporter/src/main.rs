//! WebStore report runner.
//!
//! Prints all ten reports to stdout. Logs go to stderr.

use std::io::Write;
use std::process::ExitCode;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webstore_db::{ReportConsole, ReportRepository, connect_with};
use webstore_shared::{AppConfig, AppError};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "reporter=info,webstore=info,sea_orm=warn";

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let db = connect_with(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(
        max_connections = config.database.max_connections,
        "Connected to database"
    );

    let console = ReportConsole::new(ReportRepository::new(db), config.reports);
    let mut out = std::io::stdout().lock();
    console.print_all(&mut out, Utc::now().naive_utc()).await?;
    out.flush().map_err(|e| AppError::Output(e.to_string()))?;

    info!("Reports complete");
    Ok(())
}
