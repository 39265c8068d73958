//! Report data types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary fields of one order item, as needed for totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Price per unit.
    pub unit_price: Decimal,
    /// Units ordered.
    pub quantity: i32,
    /// Absolute amount subtracted from the line.
    pub discount: Decimal,
}

/// A customer as listed by the customer report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRow {
    /// Customer ID.
    pub customer_id: i32,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
}

/// One order with the number of units it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemCountRow {
    /// Order ID.
    pub order_id: i32,
    /// First name of the ordering customer.
    pub customer_first_name: String,
    /// Order status text.
    pub order_status: String,
    /// Sum of item quantities.
    pub item_count: i64,
}

/// Orders with item counts plus the grand total across all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemCountReport {
    /// Per-order rows in source order.
    pub rows: Vec<OrderItemCountRow>,
    /// Sum of all `item_count` values.
    pub total_items: i64,
}

/// A product and its list price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPriceRow {
    /// Product ID.
    pub product_id: i32,
    /// Product name.
    pub product_name: String,
    /// List price.
    pub price: Decimal,
}

/// A pending order and its total after discounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOrderRow {
    /// Order ID.
    pub order_id: i32,
    /// First name of the ordering customer.
    pub customer_first_name: String,
    /// When the order was placed.
    pub order_date: NaiveDateTime,
    /// Sum of line totals.
    pub total: Decimal,
}

/// Number of orders a customer has placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOrderCountRow {
    /// Customer ID.
    pub customer_id: i32,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Orders referencing this customer.
    pub order_count: i64,
}

impl CustomerOrderCountRow {
    /// Returns `"{first} {last}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Value of a single order, measured as the sum of its unit prices.
///
/// This is a per-order figure: a customer with several orders appears once
/// per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderValueRow {
    /// Order ID.
    pub order_id: i32,
    /// First name of the ordering customer.
    pub customer_first_name: String,
    /// Sum of the order's item unit prices.
    pub value: Decimal,
}

/// An order placed inside the recent window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentOrderRow {
    /// Order ID.
    pub order_id: i32,
    /// When the order was placed.
    pub order_date: NaiveDateTime,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
}

/// Units sold of a product across all orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSalesRow {
    /// Product ID.
    pub product_id: i32,
    /// Product name.
    pub product_name: String,
    /// Sum of order item quantities; zero for unsold products.
    pub total_sold: i64,
}

/// One discounted order item together with its order and customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountedItemRow {
    /// Order ID.
    pub order_id: i32,
    /// Order item ID.
    pub order_item_id: i32,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Name of the discounted product.
    pub product_name: String,
    /// Discount amount, always greater than zero.
    pub discount: Decimal,
}

/// The store holding the most units of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStock {
    /// Store name.
    pub store_name: String,
    /// Units in stock at that store.
    pub quantity_in_stock: i32,
}

/// Cross-report entry for one product of the selected category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProductRow {
    /// Product ID.
    pub product_id: i32,
    /// Product name.
    pub product_name: String,
    /// Best-stocked store, if any stock row exists.
    pub top_stock: Option<StoreStock>,
    /// IDs of the orders containing the product, ascending.
    pub order_ids: Vec<i32>,
}
