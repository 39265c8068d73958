//! Report repository for retail report database operations.
//!
//! Each query materializes its driving rows first, then eager-loads the
//! related rows it needs in explicit follow-up queries. Decimal sums are
//! computed in Rust over the fetched rows, never by SQL aggregates.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, LoaderTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    sea_query::{Expr, Query},
};
use tracing::debug;
use webstore_core::reports::{
    CategoryProductRow, CustomerOrderCountRow, CustomerRow, DiscountedItemRow, LineItem,
    OrderItemCountReport, OrderItemCountRow, OrderValueRow, PendingOrderRow, ProductPriceRow,
    ProductSalesRow, RecentOrderRow, ReportService, StoreStock, item_count, order_total,
    unit_price_sum,
};
use webstore_shared::AppError;

use crate::entities::{
    categories, customers, order_items, orders, product_categories, products, stocks, stores,
};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A navigation target row does not exist.
    #[error("{entity} not found: {id}")]
    MissingRelation {
        /// Entity that was expected.
        entity: &'static str,
        /// Key that was looked up.
        id: i32,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Writing report output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::MissingRelation { .. } => Self::NotFound(err.to_string()),
            ReportError::Database(e) => Self::Database(e.to_string()),
            ReportError::Output(e) => Self::Output(e.to_string()),
        }
    }
}

/// Grouped order count as returned by the database.
#[derive(Debug, FromQueryResult)]
struct CustomerOrderCount {
    customer_id: i32,
    first_name: String,
    last_name: String,
    order_count: i64,
}

/// Report repository for retail report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Lists every customer in ID order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_customers(&self) -> Result<Vec<CustomerRow>, ReportError> {
        let customers = customers::Entity::find()
            .order_by_asc(customers::Column::CustomerId)
            .all(&self.db)
            .await?;

        debug!(count = customers.len(), "Loaded customers");

        Ok(customers
            .into_iter()
            .map(|c| CustomerRow {
                customer_id: c.customer_id,
                first_name: c.first_name,
                last_name: c.last_name,
                email: c.email,
            })
            .collect())
    }

    /// Counts the orders of every customer that has at least one order.
    ///
    /// Grouping and counting happen in the database; rows are in customer ID order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn order_count_per_customer(
        &self,
    ) -> Result<Vec<CustomerOrderCountRow>, ReportError> {
        let counts = orders::Entity::find()
            .select_only()
            .column(customers::Column::CustomerId)
            .column(customers::Column::FirstName)
            .column(customers::Column::LastName)
            .column_as(
                Expr::col((orders::Entity, orders::Column::OrderId)).count(),
                "order_count",
            )
            .join(JoinType::InnerJoin, orders::Relation::Customers.def())
            .group_by(customers::Column::CustomerId)
            .group_by(customers::Column::FirstName)
            .group_by(customers::Column::LastName)
            .order_by_asc(customers::Column::CustomerId)
            .into_model::<CustomerOrderCount>()
            .all(&self.db)
            .await?;

        debug!(groups = counts.len(), "Counted orders per customer");

        Ok(counts
            .into_iter()
            .map(|c| CustomerOrderCountRow {
                customer_id: c.customer_id,
                first_name: c.first_name,
                last_name: c.last_name,
                order_count: c.order_count,
            })
            .collect())
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// Lists every order with the sum of its item quantities and a grand total.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or an order's customer is missing.
    pub async fn orders_with_item_count(&self) -> Result<OrderItemCountReport, ReportError> {
        let (orders, customers) = self
            .orders_with_customers(orders::Entity::find())
            .await?;
        let items = self.load_line_items(&orders).await?;

        let rows = orders
            .into_iter()
            .zip(customers)
            .zip(items)
            .map(|((order, customer), items)| OrderItemCountRow {
                order_id: order.order_id,
                customer_first_name: customer.first_name,
                order_status: order.order_status,
                item_count: item_count(&items),
            })
            .collect();

        Ok(ReportService::summarize_item_counts(rows))
    }

    /// Lists orders whose status equals `status`, each with its discounted total.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or an order's customer is missing.
    pub async fn pending_orders_with_total(
        &self,
        status: &str,
    ) -> Result<Vec<PendingOrderRow>, ReportError> {
        let (orders, customers) = self
            .orders_with_customers(
                orders::Entity::find().filter(orders::Column::OrderStatus.eq(status)),
            )
            .await?;
        let items = self.load_line_items(&orders).await?;

        debug!(status, count = orders.len(), "Loaded orders by status");

        Ok(orders
            .into_iter()
            .zip(customers)
            .zip(items)
            .map(|((order, customer), items)| PendingOrderRow {
                order_id: order.order_id,
                customer_first_name: customer.first_name,
                order_date: order.order_date,
                total: order_total(&items),
            })
            .collect())
    }

    /// Ranks single orders by the sum of their item unit prices and keeps `limit` of them.
    ///
    /// The value is per order: a customer with several orders can appear more than once.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or an order's customer is missing.
    pub async fn top_orders_by_value(
        &self,
        limit: u64,
    ) -> Result<Vec<OrderValueRow>, ReportError> {
        let (orders, customers) = self
            .orders_with_customers(orders::Entity::find())
            .await?;
        let items = self.load_line_items(&orders).await?;

        let rows = orders
            .into_iter()
            .zip(customers)
            .zip(items)
            .map(|((order, customer), items)| OrderValueRow {
                order_id: order.order_id,
                customer_first_name: customer.first_name,
                value: unit_price_sum(&items),
            })
            .collect();

        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(ReportService::top_by_value(rows, limit))
    }

    /// Lists orders placed within `days` days before `now`, inclusive of the cutoff.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or an order's customer is missing.
    pub async fn recent_orders(
        &self,
        now: NaiveDateTime,
        days: i64,
    ) -> Result<Vec<RecentOrderRow>, ReportError> {
        let cutoff = ReportService::recent_cutoff(now, days);
        let (orders, customers) = self
            .orders_with_customers(
                orders::Entity::find().filter(orders::Column::OrderDate.gte(cutoff)),
            )
            .await?;

        debug!(%cutoff, count = orders.len(), "Loaded recent orders");

        Ok(orders
            .into_iter()
            .zip(customers)
            .map(|(order, customer)| RecentOrderRow {
                order_id: order.order_id,
                order_date: order.order_date,
                first_name: customer.first_name,
                last_name: customer.last_name,
            })
            .collect())
    }

    /// Lists every discounted order item with its order, customer, and product.
    ///
    /// Orders without any discounted item are excluded, and items without a
    /// discount are left out of the orders that remain.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a related row is missing.
    pub async fn discounted_orders(&self) -> Result<Vec<DiscountedItemRow>, ReportError> {
        let discounted_order_ids = Query::select()
            .column((order_items::Entity, order_items::Column::OrderId))
            .from(order_items::Entity)
            .and_where(order_items::Column::Discount.gt(Decimal::ZERO))
            .to_owned();

        let (orders, customers) = self
            .orders_with_customers(
                orders::Entity::find()
                    .filter(orders::Column::OrderId.in_subquery(discounted_order_ids)),
            )
            .await?;

        let mut items = orders
            .load_many(
                order_items::Entity::find()
                    .filter(order_items::Column::Discount.gt(Decimal::ZERO)),
                &self.db,
            )
            .await?;
        for group in &mut items {
            group.sort_by_key(|i| i.order_item_id);
        }

        let flat: Vec<order_items::Model> = items.iter().flatten().cloned().collect();
        let product_names: HashMap<i32, String> = flat
            .load_one(products::Entity, &self.db)
            .await?
            .into_iter()
            .flatten()
            .map(|p| (p.product_id, p.product_name))
            .collect();

        let mut rows = Vec::with_capacity(flat.len());
        for ((order, customer), items) in orders.into_iter().zip(customers).zip(items) {
            for item in items {
                let product_name = product_names.get(&item.product_id).cloned().ok_or(
                    ReportError::MissingRelation {
                        entity: "product",
                        id: item.product_id,
                    },
                )?;

                rows.push(DiscountedItemRow {
                    order_id: order.order_id,
                    order_item_id: item.order_item_id,
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    product_name,
                    discount: item.discount,
                });
            }
        }

        debug!(count = rows.len(), "Loaded discounted items");

        Ok(rows)
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// Lists every product, most expensive first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn products_by_price(&self) -> Result<Vec<ProductPriceRow>, ReportError> {
        let products = products::Entity::find()
            .order_by_desc(products::Column::Price)
            .order_by_asc(products::Column::ProductId)
            .all(&self.db)
            .await?;

        debug!(count = products.len(), "Loaded products by price");

        Ok(products
            .into_iter()
            .map(|p| ProductPriceRow {
                product_id: p.product_id,
                product_name: p.product_name,
                price: p.price,
            })
            .collect())
    }

    /// Sums the quantity sold of every product, best sellers first.
    ///
    /// Products that were never ordered are included with zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn total_sold_per_product(&self) -> Result<Vec<ProductSalesRow>, ReportError> {
        let products = products::Entity::find()
            .order_by_asc(products::Column::ProductId)
            .all(&self.db)
            .await?;
        let items = products.load_many(order_items::Entity, &self.db).await?;

        let rows = products
            .into_iter()
            .zip(items)
            .map(|(product, items)| ProductSalesRow {
                product_id: product.product_id,
                product_name: product.product_name,
                total_sold: items.iter().map(|i| i64::from(i.quantity)).sum(),
            })
            .collect();

        Ok(ReportService::rank_by_total_sold(rows))
    }

    /// For every product in `category`: the store with the most units in stock
    /// and the orders that contain the product.
    ///
    /// Issues one product query, then two queries per matching product.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stock row's store is missing.
    pub async fn category_cross_report(
        &self,
        category: &str,
    ) -> Result<Vec<CategoryProductRow>, ReportError> {
        // A product linked to several same-named categories is still listed once.
        let in_category = Query::select()
            .column((product_categories::Entity, product_categories::Column::ProductId))
            .from(product_categories::Entity)
            .inner_join(
                categories::Entity,
                Expr::col((categories::Entity, categories::Column::CategoryId))
                    .equals((product_categories::Entity, product_categories::Column::CategoryId)),
            )
            .and_where(
                Expr::col((categories::Entity, categories::Column::CategoryName)).eq(category),
            )
            .to_owned();

        let products = products::Entity::find()
            .filter(products::Column::ProductId.in_subquery(in_category))
            .order_by_asc(products::Column::ProductId)
            .all(&self.db)
            .await?;

        debug!(category, count = products.len(), "Loaded products in category");

        let mut rows = Vec::with_capacity(products.len());
        for product in products {
            let order_ids = self.order_ids_containing(product.product_id).await?;
            let top_stock = self.top_stock(product.product_id).await?;

            rows.push(CategoryProductRow {
                product_id: product.product_id,
                product_name: product.product_name,
                top_stock,
                order_ids,
            });
        }

        Ok(rows)
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    /// Runs an order query in ID order together with each order's customer.
    async fn orders_with_customers(
        &self,
        query: Select<orders::Entity>,
    ) -> Result<(Vec<orders::Model>, Vec<customers::Model>), ReportError> {
        let pairs = query
            .order_by_asc(orders::Column::OrderId)
            .find_also_related(customers::Entity)
            .all(&self.db)
            .await?;

        let mut orders = Vec::with_capacity(pairs.len());
        let mut customers = Vec::with_capacity(pairs.len());
        for (order, customer) in pairs {
            let customer = customer.ok_or(ReportError::MissingRelation {
                entity: "customer",
                id: order.customer_id,
            })?;
            orders.push(order);
            customers.push(customer);
        }

        Ok((orders, customers))
    }

    /// Eager-loads the items of each order, in the same order as `orders`.
    async fn load_line_items(
        &self,
        orders: &[orders::Model],
    ) -> Result<Vec<Vec<LineItem>>, ReportError> {
        let items = orders.load_many(order_items::Entity, &self.db).await?;

        Ok(items
            .into_iter()
            .map(|items| items.iter().map(order_items::Model::line_item).collect())
            .collect())
    }

    /// IDs of the orders with at least one item of `product_id`, ascending.
    async fn order_ids_containing(&self, product_id: i32) -> Result<Vec<i32>, ReportError> {
        let containing = Query::select()
            .column((order_items::Entity, order_items::Column::OrderId))
            .from(order_items::Entity)
            .and_where(order_items::Column::ProductId.eq(product_id))
            .to_owned();

        let ids: Vec<i32> = orders::Entity::find()
            .select_only()
            .column(orders::Column::OrderId)
            .filter(orders::Column::OrderId.in_subquery(containing))
            .order_by_asc(orders::Column::OrderId)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(ids)
    }

    /// The store holding the most units of `product_id`; the lowest stock ID wins ties.
    async fn top_stock(&self, product_id: i32) -> Result<Option<StoreStock>, ReportError> {
        let top = stocks::Entity::find()
            .filter(stocks::Column::ProductId.eq(product_id))
            .order_by_desc(stocks::Column::QuantityInStock)
            .order_by_asc(stocks::Column::StockId)
            .find_also_related(stores::Entity)
            .one(&self.db)
            .await?;

        let Some((stock, store)) = top else {
            return Ok(None);
        };
        let store = store.ok_or(ReportError::MissingRelation {
            entity: "store",
            id: stock.store_id,
        })?;

        Ok(Some(StoreStock {
            store_name: store.store_name,
            quantity_in_stock: stock.quantity_in_stock,
        }))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
