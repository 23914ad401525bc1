#![forbid(unsafe_code)]
//! Pure derived views over store snapshots.
//!
//! Everything here is a stateless function of its inputs, recomputed on
//! every snapshot change. Nothing fails: empty inputs yield zero-valued
//! summaries and empty lists, so the dashboard can always render these in
//! degraded mode without extra round-trips.

use opsdeck_model::{InventoryItem, Order, OrderStatus, Summary};

pub const CRATE_NAME: &str = "opsdeck-views";

/// Inventory rows sitting below their threshold, input order preserved.
#[must_use]
pub fn low_stock(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items.iter().filter(|item| item.is_low()).cloned().collect()
}

/// Aggregate counters over whatever snapshots are currently held, remote
/// or fallback alike.
#[must_use]
pub fn summary(orders: &[Order], inventory: &[InventoryItem]) -> Summary {
    let pending = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Pending)
        .count() as u64;
    let completed = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .count() as u64;
    Summary {
        total_orders: orders.len() as u64,
        pending_orders: pending,
        completed_orders: completed,
        low_stock_items: low_stock(inventory).len() as u64,
    }
}

/// Stable prefix slice for quick-view panels.
#[must_use]
pub fn top_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items.iter().take(n).cloned().collect()
}
