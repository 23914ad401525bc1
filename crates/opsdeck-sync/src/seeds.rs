// SPDX-License-Identifier: Apache-2.0

use opsdeck_model::{InventoryItem, Order, OrderStatus};

/// Deterministic fallback dataset for one resource collection, supplied at
/// store construction. Stable across calls, so degraded loads are
/// reproducible and tests can substitute fixed seeds.
#[derive(Debug, Clone)]
pub struct FallbackSeeds<R> {
    items: Vec<R>,
}

impl<R: Clone> FallbackSeeds<R> {
    #[must_use]
    pub fn new(items: Vec<R>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> Vec<R> {
        self.items.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[must_use]
pub fn default_order_seeds() -> FallbackSeeds<Order> {
    FallbackSeeds::new(vec![
        order(1, "Gear", 10, OrderStatus::Pending),
        order(2, "Bolt Pack", 50, OrderStatus::Completed),
        order(3, "Steel Sheet", 5, OrderStatus::Pending),
        order(4, "Wire Roll", 2, OrderStatus::Completed),
    ])
}

#[must_use]
pub fn default_inventory_seeds() -> FallbackSeeds<InventoryItem> {
    FallbackSeeds::new(vec![
        item(1, "Steel", 20, 30),
        item(2, "Bolts", 120, 50),
        item(3, "Wires", 10, 25),
        item(4, "Nuts", 60, 40),
        item(5, "Plates", 15, 20),
    ])
}

fn order(id: u64, product_name: &str, quantity: u32, status: OrderStatus) -> Order {
    Order {
        id,
        product_name: product_name.to_string(),
        quantity,
        status,
    }
}

fn item(id: u64, item_name: &str, stock_qty: u32, min_threshold: u32) -> InventoryItem {
    InventoryItem {
        id,
        item_name: item_name.to_string(),
        stock_qty,
        min_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds_are_stable_across_calls() {
        assert_eq!(default_order_seeds().items(), default_order_seeds().items());
        assert_eq!(
            default_inventory_seeds().items(),
            default_inventory_seeds().items()
        );
    }

    #[test]
    fn default_inventory_seeds_contain_low_stock_rows() {
        let low = default_inventory_seeds()
            .items()
            .iter()
            .filter(|it| it.is_low())
            .count();
        assert_eq!(low, 3, "Steel, Wires and Plates sit below threshold");
    }
}
