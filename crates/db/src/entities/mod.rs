//! `SeaORM` entities for the retail schema.

pub mod prelude;

pub mod categories;
pub mod customers;
pub mod order_items;
pub mod orders;
pub mod product_categories;
pub mod products;
pub mod stocks;
pub mod stores;
