// SPDX-License-Identifier: Apache-2.0

use opsdeck_model::{InventoryItem, Order, OrderStatus};
use opsdeck_views::{low_stock, summary};
use proptest::prelude::*;

fn arb_order() -> impl Strategy<Value = Order> {
    (1u64..10_000, "[A-Za-z ]{1,12}", 1u32..500, any::<bool>()).prop_map(
        |(id, product_name, quantity, completed)| Order {
            id,
            product_name,
            quantity,
            status: if completed {
                OrderStatus::Completed
            } else {
                OrderStatus::Pending
            },
        },
    )
}

fn arb_item() -> impl Strategy<Value = InventoryItem> {
    (1u64..10_000, "[A-Za-z ]{1,12}", 0u32..500, 0u32..500).prop_map(
        |(id, item_name, stock_qty, min_threshold)| InventoryItem {
            id,
            item_name,
            stock_qty,
            min_threshold,
        },
    )
}

proptest! {
    #[test]
    fn status_counts_partition_total(orders in prop::collection::vec(arb_order(), 0..32)) {
        let s = summary(&orders, &[]);
        prop_assert_eq!(s.total_orders, orders.len() as u64);
        prop_assert_eq!(s.pending_orders + s.completed_orders, s.total_orders);
    }

    #[test]
    fn low_stock_count_matches_derived_flags(
        inventory in prop::collection::vec(arb_item(), 0..32),
    ) {
        let s = summary(&[], &inventory);
        let flagged = inventory.iter().filter(|item| item.is_low()).count() as u64;
        prop_assert_eq!(s.low_stock_items, flagged);
        prop_assert_eq!(low_stock(&inventory).len() as u64, flagged);
    }

    #[test]
    fn low_stock_is_an_order_preserving_subsequence(
        inventory in prop::collection::vec(arb_item(), 0..32),
    ) {
        let low = low_stock(&inventory);
        let mut remaining = inventory.iter();
        for picked in &low {
            prop_assert!(remaining.any(|item| item == picked));
        }
    }
}
