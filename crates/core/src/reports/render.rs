//! Line-oriented rendering of report rows.
//!
//! Every function returns the body lines of one report. An empty input
//! renders as a single "not found" line; headers come from the `*_TITLE`
//! constants and [`top_by_value_title`].
//!
//! Amounts are printed normalized on every backend: `10.00` as `10`, `2.50`
//! as `2.5`.

use webstore_shared::types::{Currency, Money};

use super::types::{
    CategoryProductRow, CustomerOrderCountRow, CustomerRow, DiscountedItemRow,
    OrderItemCountReport, OrderValueRow, PendingOrderRow, ProductPriceRow, ProductSalesRow,
    RecentOrderRow,
};

/// Header of the customer list.
pub const CUSTOMERS_TITLE: &str = "=== Task 01: List All Customers ===";
/// Header of the orders-with-item-count report.
pub const ITEM_COUNTS_TITLE: &str = "=== Task 02: List Orders With Item Count ===";
/// Header of the products-by-price report.
pub const PRODUCTS_BY_PRICE_TITLE: &str = "=== Task 03: List Products By Descending Price ===";
/// Header of the pending-orders report.
pub const PENDING_ORDERS_TITLE: &str = "=== Task 04: List Pending Orders With Total Price ===";
/// Header of the order-count-per-customer report.
pub const ORDER_COUNTS_TITLE: &str = "=== Task 05: Order Count Per Customer ===";
/// Header of the recent-orders report.
pub const RECENT_ORDERS_TITLE: &str = "=== Task 07: Recent Orders ===";
/// Header of the total-sold-per-product report.
pub const TOTAL_SOLD_TITLE: &str = "=== Task 08: Total Sold Per Product ===";
/// Header of the discounted-orders report.
pub const DISCOUNTED_ORDERS_TITLE: &str = "=== Task 09: Discounted Orders ===";
/// Header of the category cross-report.
pub const CATEGORY_REPORT_TITLE: &str = "=== Task 10: Advanced Query Example ===";

/// Header of the top-by-value report for a given limit.
#[must_use]
pub fn top_by_value_title(limit: u64) -> String {
    format!("=== Task 06: Top {limit} Customers By Order Value ===")
}

fn or_empty(lines: Vec<String>, message: &str) -> Vec<String> {
    if lines.is_empty() {
        vec![message.to_string()]
    } else {
        lines
    }
}

/// `{first} {last} - {email}` per customer.
#[must_use]
pub fn customers(rows: &[CustomerRow]) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|c| format!("{} {} - {}", c.first_name, c.last_name, c.email))
        .collect();
    or_empty(lines, "No customers found.")
}

/// One line per order followed by the grand total.
#[must_use]
pub fn item_counts(report: &OrderItemCountReport) -> Vec<String> {
    if report.rows.is_empty() {
        return vec!["No orders found.".to_string()];
    }

    let mut lines: Vec<String> = report
        .rows
        .iter()
        .map(|o| {
            format!(
                "Name: {}, Orderstatus: {}, Quantity: {}",
                o.customer_first_name, o.order_status, o.item_count
            )
        })
        .collect();
    lines.push(format!("Total items ordered: {}", report.total_items));
    lines
}

/// `{name}: {price}` per product.
#[must_use]
pub fn products_by_price(rows: &[ProductPriceRow]) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|p| format!("{}: {}", p.product_name, p.price.normalize()))
        .collect();
    or_empty(lines, "No products found.")
}

/// Pending orders with their discounted totals.
#[must_use]
pub fn pending_orders(rows: &[PendingOrderRow]) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|o| {
            format!(
                "Name: {} ID: {} Date: {} Price: {}",
                o.customer_first_name,
                o.order_id,
                o.order_date,
                o.total.normalize()
            )
        })
        .collect();
    or_empty(lines, "No orders found.")
}

/// Order count per customer.
#[must_use]
pub fn order_counts(rows: &[CustomerOrderCountRow]) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|c| format!("Full name: {}, Order count: {}", c.full_name(), c.order_count))
        .collect();
    or_empty(lines, "No orders found.")
}

/// First name and value per ranked order.
#[must_use]
pub fn top_by_value(rows: &[OrderValueRow]) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|o| {
            format!(
                "Name: {} Total: {}",
                o.customer_first_name,
                o.value.normalize()
            )
        })
        .collect();
    or_empty(lines, "No customers found.")
}

/// Recent orders; the empty message names the window size.
#[must_use]
pub fn recent_orders(rows: &[RecentOrderRow], days: i64) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|o| {
            format!(
                "ID: {}, Date: {}, Name: {} {}",
                o.order_id, o.order_date, o.first_name, o.last_name
            )
        })
        .collect();
    or_empty(lines, &format!("No orders found from past {days} days."))
}

/// Units sold per product.
#[must_use]
pub fn total_sold(rows: &[ProductSalesRow]) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|p| format!("Name: {} Total sold: {}", p.product_name, p.total_sold))
        .collect();
    or_empty(lines, "No products found.")
}

/// Discounted items, with the discount printed as a deduction in `currency`.
#[must_use]
pub fn discounted_items(rows: &[DiscountedItemRow], currency: Currency) -> Vec<String> {
    let lines = rows
        .iter()
        .map(|i| {
            format!(
                "ID: {}, Name: {} {}, Product name: {}, Discount: {}",
                i.order_id,
                i.first_name,
                i.last_name,
                i.product_name,
                Money::new(i.discount.normalize(), currency).as_deduction()
            )
        })
        .collect();
    or_empty(lines, "No discounted orders found.")
}

/// Per product: the best-stocked store (when known), then each containing order.
#[must_use]
pub fn category_report(rows: &[CategoryProductRow], category: &str) -> Vec<String> {
    if rows.is_empty() {
        return vec![format!("No products found in category {category}.")];
    }

    let mut lines = Vec::new();
    for product in rows {
        if let Some(stock) = &product.top_stock {
            lines.push(format!(
                "{} has highest stock in {}",
                product.product_name, stock.store_name
            ));
        }
        for order_id in &product.order_ids {
            lines.push(format!(
                "Order ID: {order_id} containts: {}",
                product.product_name
            ));
        }
    }
    lines
}
