//! Printed form of the reports.
//!
//! Every `print_*` method runs the matching [`ReportRepository`] query,
//! renders it, and writes the header followed by the body lines.

use std::io::Write;

use chrono::NaiveDateTime;
use webstore_core::reports::render;
use webstore_shared::ReportConfig;

use crate::repositories::{ReportError, ReportRepository};

/// Writes reports to any [`Write`] sink using the configured parameters.
#[derive(Debug, Clone)]
pub struct ReportConsole {
    repo: ReportRepository,
    config: ReportConfig,
}

impl ReportConsole {
    /// Creates a console over a repository.
    #[must_use]
    pub const fn new(repo: ReportRepository, config: ReportConfig) -> Self {
        Self { repo, config }
    }

    /// Report parameters in use.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Prints all ten reports in order, separated by a blank line.
    ///
    /// # Errors
    ///
    /// Stops at the first report that fails and returns its error.
    pub async fn print_all<W: Write>(
        &self,
        out: &mut W,
        now: NaiveDateTime,
    ) -> Result<(), ReportError> {
        self.print_customers(out).await?;
        writeln!(out)?;
        self.print_orders_with_item_count(out).await?;
        writeln!(out)?;
        self.print_products_by_price(out).await?;
        writeln!(out)?;
        self.print_pending_orders(out).await?;
        writeln!(out)?;
        self.print_order_count_per_customer(out).await?;
        writeln!(out)?;
        self.print_top_orders_by_value(out).await?;
        writeln!(out)?;
        self.print_recent_orders(out, now).await?;
        writeln!(out)?;
        self.print_total_sold_per_product(out).await?;
        writeln!(out)?;
        self.print_discounted_orders(out).await?;
        writeln!(out)?;
        self.print_category_cross_report(out).await?;
        out.flush()?;
        Ok(())
    }

    /// Task 01.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_customers<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let rows = self.repo.list_customers().await?;
        write_report(out, render::CUSTOMERS_TITLE, &render::customers(&rows))
    }

    /// Task 02.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_orders_with_item_count<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let report = self.repo.orders_with_item_count().await?;
        write_report(out, render::ITEM_COUNTS_TITLE, &render::item_counts(&report))
    }

    /// Task 03.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_products_by_price<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let rows = self.repo.products_by_price().await?;
        write_report(
            out,
            render::PRODUCTS_BY_PRICE_TITLE,
            &render::products_by_price(&rows),
        )
    }

    /// Task 04, filtered by the configured pending status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_pending_orders<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let rows = self
            .repo
            .pending_orders_with_total(&self.config.pending_status)
            .await?;
        write_report(
            out,
            render::PENDING_ORDERS_TITLE,
            &render::pending_orders(&rows),
        )
    }

    /// Task 05.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_order_count_per_customer<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let rows = self.repo.order_count_per_customer().await?;
        write_report(out, render::ORDER_COUNTS_TITLE, &render::order_counts(&rows))
    }

    /// Task 06, keeping the configured number of orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_top_orders_by_value<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let limit = self.config.top_limit;
        let rows = self.repo.top_orders_by_value(limit).await?;
        write_report(
            out,
            &render::top_by_value_title(limit),
            &render::top_by_value(&rows),
        )
    }

    /// Task 07, over the configured window ending at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_recent_orders<W: Write>(
        &self,
        out: &mut W,
        now: NaiveDateTime,
    ) -> Result<(), ReportError> {
        let days = self.config.recent_days;
        let rows = self.repo.recent_orders(now, days).await?;
        write_report(
            out,
            render::RECENT_ORDERS_TITLE,
            &render::recent_orders(&rows, days),
        )
    }

    /// Task 08.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_total_sold_per_product<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let rows = self.repo.total_sold_per_product().await?;
        write_report(out, render::TOTAL_SOLD_TITLE, &render::total_sold(&rows))
    }

    /// Task 09, discounts shown in the configured currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_discounted_orders<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let rows = self.repo.discounted_orders().await?;
        write_report(
            out,
            render::DISCOUNTED_ORDERS_TITLE,
            &render::discounted_items(&rows, self.config.currency),
        )
    }

    /// Task 10, for the configured category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query or the write fails.
    pub async fn print_category_cross_report<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), ReportError> {
        let category = &self.config.category;
        let rows = self.repo.category_cross_report(category).await?;
        write_report(
            out,
            render::CATEGORY_REPORT_TITLE,
            &render::category_report(&rows, category),
        )
    }
}

fn write_report<W: Write>(out: &mut W, title: &str, lines: &[String]) -> Result<(), ReportError> {
    writeln!(out, "{title}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
