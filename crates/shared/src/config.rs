//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Report parameters.
    #[serde(default)]
    pub reports: ReportConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Parameters that the individual reports filter or limit by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Order status treated as pending.
    #[serde(default = "default_pending_status")]
    pub pending_status: String,
    /// Size of the recent-orders window in days.
    #[serde(default = "default_recent_days")]
    pub recent_days: i64,
    /// Number of rows kept by the top-by-value report.
    #[serde(default = "default_top_limit")]
    pub top_limit: u64,
    /// Category name driving the cross-report.
    #[serde(default = "default_category")]
    pub category: String,
    /// Currency used when printing discounts.
    #[serde(default)]
    pub currency: Currency,
}

fn default_pending_status() -> String {
    "Pending".to_string()
}

fn default_recent_days() -> i64 {
    30
}

fn default_top_limit() -> u64 {
    3
}

fn default_category() -> String {
    "Electronics".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pending_status: default_pending_status(),
            recent_days: default_recent_days(),
            top_limit: default_top_limit(),
            category: default_category(),
            currency: Currency::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("WEBSTORE").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or misses required keys.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
