//! Database layer with `SeaORM` entities and report queries.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the retail schema
//! - `ReportRepository` for the data-returning form of every report
//! - `ReportConsole` for the printed form
//! - Database migrations and demo seed data

pub mod console;
pub mod entities;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use console::ReportConsole;
pub use repositories::{ReportError, ReportRepository};

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use webstore_shared::DatabaseConfig;

/// Establishes a pooled connection using the configured pool bounds.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    Database::connect(options).await
}
