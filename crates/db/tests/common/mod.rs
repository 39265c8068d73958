//! Shared fixtures for report integration tests.
//!
//! Every test gets its own migrated in-memory SQLite database. Amounts use
//! values that SQLite stores exactly as `REAL`.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, Set};
use webstore_db::entities::{
    categories, customers, order_items, orders, product_categories, products, stocks, stores,
};
use webstore_db::migration::{Migrator, MigratorTrait};

/// Opens a fresh in-memory database with the schema applied.
///
/// The pool is pinned to one connection so every query sees the same database.
pub async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Noon on the given day.
pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
}

/// The reference "now" used with [`scenario`].
pub fn now() -> NaiveDateTime {
    at(2026, 10, 14)
}

// ============================================================================
// Row inserts
// ============================================================================

pub async fn customer(db: &DatabaseConnection, id: i32, first: &str, last: &str) {
    customers::Entity::insert(customers::ActiveModel {
        customer_id: Set(id),
        first_name: Set(first.to_string()),
        last_name: Set(last.to_string()),
        email: Set(format!("{}@example.com", first.to_lowercase())),
    })
    .exec(db)
    .await
    .expect("Failed to insert customer");
}

pub async fn product(db: &DatabaseConnection, id: i32, name: &str, price: Decimal) {
    products::Entity::insert(products::ActiveModel {
        product_id: Set(id),
        product_name: Set(name.to_string()),
        price: Set(price),
    })
    .exec(db)
    .await
    .expect("Failed to insert product");
}

pub async fn category(db: &DatabaseConnection, id: i32, name: &str) {
    categories::Entity::insert(categories::ActiveModel {
        category_id: Set(id),
        category_name: Set(name.to_string()),
    })
    .exec(db)
    .await
    .expect("Failed to insert category");
}

pub async fn link(db: &DatabaseConnection, product_id: i32, category_id: i32) {
    product_categories::Entity::insert(product_categories::ActiveModel {
        product_id: Set(product_id),
        category_id: Set(category_id),
    })
    .exec_without_returning(db)
    .await
    .expect("Failed to link product to category");
}

pub async fn order(
    db: &DatabaseConnection,
    id: i32,
    customer_id: i32,
    date: NaiveDateTime,
    status: &str,
) {
    orders::Entity::insert(orders::ActiveModel {
        order_id: Set(id),
        customer_id: Set(customer_id),
        order_date: Set(date),
        order_status: Set(status.to_string()),
    })
    .exec(db)
    .await
    .expect("Failed to insert order");
}

pub async fn item(
    db: &DatabaseConnection,
    id: i32,
    order_id: i32,
    product_id: i32,
    quantity: i32,
    unit_price: Decimal,
    discount: Decimal,
) {
    order_items::Entity::insert(order_items::ActiveModel {
        order_item_id: Set(id),
        order_id: Set(order_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        unit_price: Set(unit_price),
        discount: Set(discount),
    })
    .exec(db)
    .await
    .expect("Failed to insert order item");
}

pub async fn store(db: &DatabaseConnection, id: i32, name: &str) {
    stores::Entity::insert(stores::ActiveModel {
        store_id: Set(id),
        store_name: Set(name.to_string()),
    })
    .exec(db)
    .await
    .expect("Failed to insert store");
}

pub async fn stock(db: &DatabaseConnection, id: i32, store_id: i32, product_id: i32, qty: i32) {
    stocks::Entity::insert(stocks::ActiveModel {
        stock_id: Set(id),
        store_id: Set(store_id),
        product_id: Set(product_id),
        quantity_in_stock: Set(qty),
    })
    .exec(db)
    .await
    .expect("Failed to insert stock");
}

// ============================================================================
// Scenario
// ============================================================================

/// Three customers, four products in two categories, two stores, three orders.
///
/// | order | customer | date       | status  | items (product × qty @ price − discount) |
/// |-------|----------|------------|---------|-------------------------------------------|
/// | 1     | Ada      | 2026-10-01 | Pending | Cable × 2 @ 10 − 1, Phone × 1 @ 5 − 0     |
/// | 2     | Ada      | 2026-08-01 | Shipped | Laptop × 1 @ 1000 − 0                     |
/// | 3     | Linus    | 2026-10-10 | Pending | Laptop × 1 @ 1000 − 50, Cable × 3 @ 10    |
///
/// Grace has no orders and the Novel is never sold. Laptop is stocked in
/// Central (5) and Harbour (12), Phone in Central (8), Cable nowhere.
pub async fn scenario(db: &DatabaseConnection) {
    customer(db, 1, "Ada", "Lovelace").await;
    customer(db, 2, "Linus", "Torvalds").await;
    customer(db, 3, "Grace", "Hopper").await;

    product(db, 1, "Laptop", dec!(1000)).await;
    product(db, 2, "Phone", dec!(500)).await;
    product(db, 3, "Cable", dec!(10)).await;
    product(db, 4, "Novel", dec!(20)).await;

    category(db, 1, "Electronics").await;
    category(db, 2, "Books").await;
    link(db, 1, 1).await;
    link(db, 2, 1).await;
    link(db, 3, 1).await;
    link(db, 4, 2).await;

    store(db, 1, "Central").await;
    store(db, 2, "Harbour").await;
    stock(db, 1, 1, 1, 5).await;
    stock(db, 2, 2, 1, 12).await;
    stock(db, 3, 1, 2, 8).await;

    order(db, 1, 1, at(2026, 10, 1), "Pending").await;
    order(db, 2, 1, at(2026, 8, 1), "Shipped").await;
    order(db, 3, 2, at(2026, 10, 10), "Pending").await;

    item(db, 1, 1, 3, 2, dec!(10), dec!(1)).await;
    item(db, 2, 1, 2, 1, dec!(5), dec!(0)).await;
    item(db, 3, 2, 1, 1, dec!(1000), dec!(0)).await;
    item(db, 4, 3, 1, 1, dec!(1000), dec!(50)).await;
    item(db, 5, 3, 3, 3, dec!(10), dec!(0)).await;
}
