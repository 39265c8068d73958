//! Report aggregation service.

use chrono::{NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

use super::types::{
    LineItem, OrderItemCountReport, OrderItemCountRow, OrderValueRow, ProductSalesRow,
};

/// Calculates `unit_price * quantity - discount` for one item.
///
/// Not clamped at zero: a discount larger than the gross amount yields a
/// negative line total.
#[must_use]
pub fn line_total(item: &LineItem) -> Decimal {
    item.unit_price * Decimal::from(item.quantity) - item.discount
}

/// Sums the line totals of an order's items.
#[must_use]
pub fn order_total(items: &[LineItem]) -> Decimal {
    items.iter().map(line_total).sum()
}

/// Sums the quantities of an order's items.
#[must_use]
pub fn item_count(items: &[LineItem]) -> i64 {
    items.iter().map(|i| i64::from(i.quantity)).sum()
}

/// Sums the unit prices of an order's items, ignoring quantity and discount.
#[must_use]
pub fn unit_price_sum(items: &[LineItem]) -> Decimal {
    items.iter().map(|i| i.unit_price).sum()
}

/// Service for shaping fetched rows into reports.
pub struct ReportService;

impl ReportService {
    /// Attaches the grand total of all item counts to the per-order rows.
    #[must_use]
    pub fn summarize_item_counts(rows: Vec<OrderItemCountRow>) -> OrderItemCountReport {
        let total_items = rows.iter().map(|r| r.item_count).sum();
        OrderItemCountReport { rows, total_items }
    }

    /// Orders rows by value, highest first, and keeps at most `limit`.
    ///
    /// The sort is stable, so equal values keep their incoming order.
    #[must_use]
    pub fn top_by_value(mut rows: Vec<OrderValueRow>, limit: usize) -> Vec<OrderValueRow> {
        rows.sort_by(|a, b| b.value.cmp(&a.value));
        rows.truncate(limit);
        rows
    }

    /// Orders products by units sold, highest first (stable).
    #[must_use]
    pub fn rank_by_total_sold(mut rows: Vec<ProductSalesRow>) -> Vec<ProductSalesRow> {
        rows.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));
        rows
    }

    /// Returns the earliest order date still inside a window of `days` ending at `now`.
    #[must_use]
    pub fn recent_cutoff(now: NaiveDateTime, days: i64) -> NaiveDateTime {
        TimeDelta::try_days(days)
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(NaiveDateTime::MIN)
    }
}
