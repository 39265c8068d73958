//! Shared types, errors, and configuration for WebStore reports.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, ReportConfig};
pub use error::{AppError, AppResult};
