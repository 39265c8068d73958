//! Demo retail data for local runs.

use chrono::{NaiveDateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait,
    Set, TransactionTrait,
};
use tracing::{debug, info};

use crate::entities::{
    categories, customers, order_items, orders, product_categories, products, stocks, stores,
};

const CUSTOMERS: [(&str, &str, &str); 4] = [
    ("Ada", "Lovelace", "ada@example.com"),
    ("Linus", "Torvalds", "linus@example.com"),
    ("Grace", "Hopper", "grace@example.com"),
    ("Alan", "Turing", "alan@example.com"),
];

const CATEGORIES: [&str; 3] = ["Electronics", "Books", "Home"];

/// Name, price in cents, category indexes.
const PRODUCTS: [(&str, i64, &[usize]); 5] = [
    ("Laptop", 129_900, &[0]),
    ("Phone", 79_950, &[0]),
    ("Headphones", 14_900, &[0, 2]),
    ("Rust Programming Book", 4_550, &[1]),
    ("Coffee Maker", 8_999, &[2]),
];

const STORES: [&str; 3] = ["Central", "Harbour", "Airport"];

/// Store index, product index, quantity in stock.
const STOCKS: [(usize, usize, i32); 7] = [
    (0, 0, 12),
    (1, 0, 4),
    (0, 1, 7),
    (2, 1, 15),
    (1, 2, 30),
    (0, 3, 9),
    (2, 4, 3),
];

/// Customer index, age in days, status.
const ORDERS: [(usize, i64, &str); 5] = [
    (0, 2, "Pending"),
    (0, 45, "Delivered"),
    (1, 10, "Shipped"),
    (1, 1, "Pending"),
    (2, 90, "Delivered"),
];

/// Order index, product index, quantity, discount in cents.
const ORDER_ITEMS: [(usize, usize, i32, i64); 8] = [
    (0, 0, 1, 5_000),
    (0, 2, 2, 0),
    (1, 3, 3, 0),
    (2, 1, 1, 2_500),
    (2, 4, 1, 0),
    (3, 2, 1, 0),
    (3, 3, 2, 250),
    (4, 0, 1, 0),
];

/// Inserts the demo catalogue with order dates relative to the current time.
///
/// Returns `false` without writing anything when customers already exist.
///
/// # Errors
///
/// Returns an error if any insert fails; the transaction is rolled back.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, DbErr> {
    seed_demo_data_at(db, Utc::now().naive_utc()).await
}

/// Inserts the demo catalogue with order dates relative to `now`.
///
/// # Errors
///
/// Returns an error if any insert fails; the transaction is rolled back.
pub async fn seed_demo_data_at(db: &DatabaseConnection, now: NaiveDateTime) -> Result<bool, DbErr> {
    if customers::Entity::find().count(db).await? > 0 {
        info!("Customers already present, skipping seed");
        return Ok(false);
    }

    let txn = db.begin().await?;

    let customer_ids = seed_customers(&txn).await?;
    let product_ids = seed_catalogue(&txn).await?;
    seed_inventory(&txn, &product_ids).await?;
    seed_orders(&txn, &customer_ids, &product_ids, now).await?;

    txn.commit().await?;

    info!(
        customers = customer_ids.len(),
        products = product_ids.len(),
        orders = ORDERS.len(),
        "Seeded demo data"
    );
    Ok(true)
}

async fn seed_customers(txn: &DatabaseTransaction) -> Result<Vec<i32>, DbErr> {
    let mut ids = Vec::with_capacity(CUSTOMERS.len());
    for (first_name, last_name, email) in CUSTOMERS {
        let customer = customers::ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(email.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        ids.push(customer.customer_id);
    }
    Ok(ids)
}

async fn seed_catalogue(txn: &DatabaseTransaction) -> Result<Vec<i32>, DbErr> {
    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let category = categories::ActiveModel {
            category_name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        category_ids.push(category.category_id);
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    for (name, cents, category_indexes) in PRODUCTS {
        let product = products::ActiveModel {
            product_name: Set(name.to_string()),
            price: Set(Decimal::new(cents, 2)),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for &index in category_indexes {
            product_categories::Entity::insert(product_categories::ActiveModel {
                product_id: Set(product.product_id),
                category_id: Set(category_ids[index]),
            })
            .exec_without_returning(txn)
            .await?;
        }
        product_ids.push(product.product_id);
    }

    debug!(categories = category_ids.len(), products = product_ids.len(), "Seeded catalogue");
    Ok(product_ids)
}

async fn seed_inventory(txn: &DatabaseTransaction, product_ids: &[i32]) -> Result<(), DbErr> {
    let mut store_ids = Vec::with_capacity(STORES.len());
    for name in STORES {
        let store = stores::ActiveModel {
            store_name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        store_ids.push(store.store_id);
    }

    for (store, product, quantity) in STOCKS {
        stocks::ActiveModel {
            store_id: Set(store_ids[store]),
            product_id: Set(product_ids[product]),
            quantity_in_stock: Set(quantity),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    Ok(())
}

async fn seed_orders(
    txn: &DatabaseTransaction,
    customer_ids: &[i32],
    product_ids: &[i32],
    now: NaiveDateTime,
) -> Result<(), DbErr> {
    let mut order_ids = Vec::with_capacity(ORDERS.len());
    for (customer, age_days, status) in ORDERS {
        let order_date = TimeDelta::try_days(age_days)
            .and_then(|age| now.checked_sub_signed(age))
            .unwrap_or(now);
        let order = orders::ActiveModel {
            customer_id: Set(customer_ids[customer]),
            order_date: Set(order_date),
            order_status: Set(status.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        order_ids.push(order.order_id);
    }

    for (order, product, quantity, discount_cents) in ORDER_ITEMS {
        let unit_price = PRODUCTS[product].1;
        order_items::ActiveModel {
            order_id: Set(order_ids[order]),
            product_id: Set(product_ids[product]),
            quantity: Set(quantity),
            unit_price: Set(Decimal::new(unit_price, 2)),
            discount: Set(Decimal::new(discount_cents, 2)),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    Ok(())
}
