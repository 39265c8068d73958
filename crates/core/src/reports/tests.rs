//! Unit tests for report aggregation and rendering.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use webstore_shared::types::Currency;

use super::render;
use super::service::{ReportService, item_count, line_total, order_total, unit_price_sum};
use super::types::*;

fn item(unit_price: Decimal, quantity: i32, discount: Decimal) -> LineItem {
    LineItem {
        unit_price,
        quantity,
        discount,
    }
}

fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

// ============================================================================
// Totals
// ============================================================================

#[rstest]
#[case(dec!(10), 2, dec!(1), dec!(19))]
#[case(dec!(5), 1, dec!(0), dec!(5))]
#[case(dec!(2.50), 4, dec!(0.50), dec!(9.50))]
#[case(dec!(3), 0, dec!(0), dec!(0))]
#[case(dec!(1), 1, dec!(4), dec!(-3))]
fn test_line_total(
    #[case] unit_price: Decimal,
    #[case] quantity: i32,
    #[case] discount: Decimal,
    #[case] expected: Decimal,
) {
    assert_eq!(line_total(&item(unit_price, quantity, discount)), expected);
}

#[test]
fn test_pending_order_scenario_total() {
    // (10*2-1) + (5*1-0)
    let items = [item(dec!(10), 2, dec!(1)), item(dec!(5), 1, dec!(0))];
    assert_eq!(order_total(&items), dec!(24));
}

#[test]
fn test_empty_order_totals() {
    assert_eq!(order_total(&[]), Decimal::ZERO);
    assert_eq!(item_count(&[]), 0);
    assert_eq!(unit_price_sum(&[]), Decimal::ZERO);
}

#[test]
fn test_unit_price_sum_ignores_quantity_and_discount() {
    let items = [item(dec!(10), 5, dec!(3)), item(dec!(2.25), 9, dec!(0))];
    assert_eq!(unit_price_sum(&items), dec!(12.25));
    assert_eq!(item_count(&items), 14);
}

// ============================================================================
// ReportService
// ============================================================================

#[test]
fn test_summarize_item_counts_folds_grand_total() {
    let rows = vec![
        OrderItemCountRow {
            order_id: 1,
            customer_first_name: "Ada".into(),
            order_status: "Pending".into(),
            item_count: 3,
        },
        OrderItemCountRow {
            order_id: 2,
            customer_first_name: "Linus".into(),
            order_status: "Shipped".into(),
            item_count: 4,
        },
    ];

    let report = ReportService::summarize_item_counts(rows);
    assert_eq!(report.total_items, 7);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].order_id, 1);
}

#[test]
fn test_top_by_value_limits_and_keeps_ties_in_order() {
    let row = |order_id, value| OrderValueRow {
        order_id,
        customer_first_name: format!("C{order_id}"),
        value,
    };
    let rows = vec![row(1, dec!(5)), row(2, dec!(20)), row(3, dec!(5)), row(4, dec!(7))];

    let top = ReportService::top_by_value(rows, 3);
    let ids: Vec<i32> = top.iter().map(|r| r.order_id).collect();
    assert_eq!(ids, vec![2, 4, 1]);
}

#[test]
fn test_top_by_value_with_fewer_rows_than_limit() {
    let rows = vec![OrderValueRow {
        order_id: 9,
        customer_first_name: "Grace".into(),
        value: dec!(1),
    }];
    assert_eq!(ReportService::top_by_value(rows, 3).len(), 1);
    assert!(ReportService::top_by_value(Vec::new(), 3).is_empty());
}

#[test]
fn test_rank_by_total_sold() {
    let row = |product_id, total_sold| ProductSalesRow {
        product_id,
        product_name: format!("P{product_id}"),
        total_sold,
    };
    let ranked = ReportService::rank_by_total_sold(vec![row(1, 0), row(2, 8), row(3, 8), row(4, 2)]);
    let ids: Vec<i32> = ranked.iter().map(|r| r.product_id).collect();
    assert_eq!(ids, vec![2, 3, 4, 1]);
}

#[test]
fn test_recent_cutoff() {
    let now = at(2026, 10, 14);
    assert_eq!(ReportService::recent_cutoff(now, 30), at(2026, 9, 14));
    assert_eq!(ReportService::recent_cutoff(now, 0), now);
}

#[test]
fn test_recent_cutoff_saturates() {
    let now = at(2026, 10, 14);
    assert_eq!(
        ReportService::recent_cutoff(now, i64::MAX),
        chrono::NaiveDateTime::MIN
    );
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_customers() {
    let rows = [CustomerRow {
        customer_id: 1,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
    }];
    assert_eq!(
        render::customers(&rows),
        vec!["Ada Lovelace - ada@example.com"]
    );
}

#[test]
fn test_render_item_counts_appends_total() {
    let report = OrderItemCountReport {
        rows: vec![OrderItemCountRow {
            order_id: 1,
            customer_first_name: "Ada".into(),
            order_status: "Pending".into(),
            item_count: 3,
        }],
        total_items: 3,
    };
    assert_eq!(
        render::item_counts(&report),
        vec![
            "Name: Ada, Orderstatus: Pending, Quantity: 3",
            "Total items ordered: 3",
        ]
    );
}

#[test]
fn test_render_pending_orders() {
    let rows = [PendingOrderRow {
        order_id: 7,
        customer_first_name: "Ada".into(),
        order_date: at(2026, 10, 1),
        total: dec!(24),
    }];
    assert_eq!(
        render::pending_orders(&rows),
        vec!["Name: Ada ID: 7 Date: 2026-10-01 12:00:00 Price: 24"]
    );
}

#[test]
fn test_render_amounts_ignore_decimal_scale() {
    let products = [ProductPriceRow {
        product_id: 1,
        product_name: "Cable".into(),
        price: dec!(10.00),
    }];
    assert_eq!(render::products_by_price(&products), vec!["Cable: 10"]);

    let top = [OrderValueRow {
        order_id: 2,
        customer_first_name: "Ada".into(),
        value: dec!(1000.50),
    }];
    assert_eq!(render::top_by_value(&top), vec!["Name: Ada Total: 1000.5"]);

    let pending = [PendingOrderRow {
        order_id: 7,
        customer_first_name: "Ada".into(),
        order_date: at(2026, 10, 1),
        total: dec!(24.00),
    }];
    assert_eq!(
        render::pending_orders(&pending),
        vec!["Name: Ada ID: 7 Date: 2026-10-01 12:00:00 Price: 24"]
    );
}

#[test]
fn test_render_discounted_items_as_deductions() {
    let rows = [DiscountedItemRow {
        order_id: 3,
        order_item_id: 11,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        product_name: "Laptop".into(),
        discount: dec!(2.50),
    }];
    assert_eq!(
        render::discounted_items(&rows, Currency::Eur),
        vec!["ID: 3, Name: Ada Lovelace, Product name: Laptop, Discount: -2.5€"]
    );
}

#[test]
fn test_render_category_report() {
    let rows = [
        CategoryProductRow {
            product_id: 1,
            product_name: "Laptop".into(),
            top_stock: Some(StoreStock {
                store_name: "Central".into(),
                quantity_in_stock: 12,
            }),
            order_ids: vec![1, 3],
        },
        CategoryProductRow {
            product_id: 2,
            product_name: "Phone".into(),
            top_stock: None,
            order_ids: vec![2],
        },
    ];
    assert_eq!(
        render::category_report(&rows, "Electronics"),
        vec![
            "Laptop has highest stock in Central",
            "Order ID: 1 containts: Laptop",
            "Order ID: 3 containts: Laptop",
            "Order ID: 2 containts: Phone",
        ]
    );
}

#[test]
fn test_render_titles() {
    assert_eq!(
        render::top_by_value_title(3),
        "=== Task 06: Top 3 Customers By Order Value ==="
    );
    assert_eq!(render::CUSTOMERS_TITLE, "=== Task 01: List All Customers ===");
}

#[test]
fn test_render_empty_messages() {
    assert_eq!(render::customers(&[]), vec!["No customers found."]);
    assert_eq!(
        render::item_counts(&OrderItemCountReport::default()),
        vec!["No orders found."]
    );
    assert_eq!(render::products_by_price(&[]), vec!["No products found."]);
    assert_eq!(render::pending_orders(&[]), vec!["No orders found."]);
    assert_eq!(render::order_counts(&[]), vec!["No orders found."]);
    assert_eq!(render::top_by_value(&[]), vec!["No customers found."]);
    assert_eq!(
        render::recent_orders(&[], 30),
        vec!["No orders found from past 30 days."]
    );
    assert_eq!(render::total_sold(&[]), vec!["No products found."]);
    assert_eq!(
        render::discounted_items(&[], Currency::Eur),
        vec!["No discounted orders found."]
    );
    assert_eq!(
        render::category_report(&[], "Electronics"),
        vec!["No products found in category Electronics."]
    );
}
