//! Demo data seeder for WebStore reports.
//!
//! Fills an empty, migrated database with a small retail catalogue, orders,
//! and stock levels. Does nothing when customers already exist.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webstore_shared::AppConfig;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "seeder=info,webstore=info,sea_orm=warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    info!("Connecting to database...");
    let db = webstore_db::connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;

    if webstore_db::seed::seed_demo_data(&db)
        .await
        .context("Failed to seed demo data")?
    {
        info!("Seeding complete!");
    } else {
        info!("Database already seeded, nothing to do");
    }

    Ok(())
}
