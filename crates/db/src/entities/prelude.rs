//! Entity re-exports.

pub use super::categories::Entity as Categories;
pub use super::customers::Entity as Customers;
pub use super::order_items::Entity as OrderItems;
pub use super::orders::Entity as Orders;
pub use super::product_categories::Entity as ProductCategories;
pub use super::products::Entity as Products;
pub use super::stocks::Entity as Stocks;
pub use super::stores::Entity as Stores;
