//! Property-based tests for report aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::{ReportService, item_count, line_total, order_total};
use super::types::{LineItem, OrderItemCountRow, OrderValueRow, ProductSalesRow};

/// Strategy for non-negative amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (amount_strategy(), 0i32..500, amount_strategy()).prop_map(
        |(unit_price, quantity, discount)| LineItem {
            unit_price,
            quantity,
            discount,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The order total is the sum of its line totals, item by item.
    #[test]
    fn prop_order_total_is_sum_of_lines(
        items in prop::collection::vec(line_item_strategy(), 0..12),
    ) {
        let mut expected = Decimal::ZERO;
        for i in &items {
            expected += i.unit_price * Decimal::from(i.quantity) - i.discount;
        }
        prop_assert_eq!(order_total(&items), expected);
    }

    /// Without discounts a line total is never negative.
    #[test]
    fn prop_undiscounted_line_total_non_negative(item in line_item_strategy()) {
        let undiscounted = LineItem { discount: Decimal::ZERO, ..item };
        prop_assert!(line_total(&undiscounted) >= Decimal::ZERO);
    }

    /// The item count equals the sum of quantities.
    #[test]
    fn prop_item_count_is_sum_of_quantities(
        items in prop::collection::vec(line_item_strategy(), 0..12),
    ) {
        let expected: i64 = items.iter().map(|i| i64::from(i.quantity)).sum();
        prop_assert_eq!(item_count(&items), expected);
    }

    /// The grand total equals the sum of the per-order counts.
    #[test]
    fn prop_grand_total_matches_rows(counts in prop::collection::vec(0i64..10_000, 0..20)) {
        let rows: Vec<OrderItemCountRow> = counts
            .iter()
            .enumerate()
            .map(|(i, c)| OrderItemCountRow {
                order_id: i32::try_from(i).unwrap(),
                customer_first_name: format!("C{i}"),
                order_status: "Pending".to_string(),
                item_count: *c,
            })
            .collect();

        let report = ReportService::summarize_item_counts(rows);
        prop_assert_eq!(report.total_items, counts.iter().sum::<i64>());
        prop_assert_eq!(report.rows.len(), counts.len());
    }

    /// The top-by-value result holds at most `limit` rows, ordered non-increasing,
    /// and no dropped row beats a kept one.
    #[test]
    fn prop_top_by_value_bounded_and_sorted(
        values in prop::collection::vec(amount_strategy(), 0..20),
        limit in 0usize..6,
    ) {
        let rows: Vec<OrderValueRow> = values
            .iter()
            .enumerate()
            .map(|(i, v)| OrderValueRow {
                order_id: i32::try_from(i).unwrap(),
                customer_first_name: format!("C{i}"),
                value: *v,
            })
            .collect();

        let top = ReportService::top_by_value(rows, limit);
        prop_assert!(top.len() <= limit);
        prop_assert_eq!(top.len(), limit.min(values.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
        if let Some(last) = top.last() {
            let kept: Vec<i32> = top.iter().map(|r| r.order_id).collect();
            for (i, v) in values.iter().enumerate() {
                if !kept.contains(&i32::try_from(i).unwrap()) {
                    prop_assert!(*v <= last.value);
                }
            }
        }
    }

    /// Ranking by units sold is a non-increasing permutation of its input.
    #[test]
    fn prop_rank_by_total_sold_sorted(totals in prop::collection::vec(0i64..1000, 0..20)) {
        let rows: Vec<ProductSalesRow> = totals
            .iter()
            .enumerate()
            .map(|(i, t)| ProductSalesRow {
                product_id: i32::try_from(i).unwrap(),
                product_name: format!("P{i}"),
                total_sold: *t,
            })
            .collect();

        let ranked = ReportService::rank_by_total_sold(rows);
        prop_assert_eq!(ranked.len(), totals.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].total_sold >= pair[1].total_sold);
        }
    }
}
