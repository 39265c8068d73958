//! Retail report generation.
//!
//! This module provides pure business logic for the WebStore reports:
//! - Line totals and per-order aggregates with decimal arithmetic
//! - Ordering and limiting of aggregated rows
//! - Text rendering of every report

pub mod render;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod tests;

pub use service::{ReportService, item_count, line_total, order_total, unit_price_sum};
pub use types::*;
