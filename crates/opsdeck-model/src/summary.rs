// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Aggregate counters shown on the dashboard tiles.
///
/// The remote `GET /summary` payload omits `completed_orders`; it defaults
/// to zero so a partial remote summary still renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_orders: u64,
    pub pending_orders: u64,
    #[serde(default)]
    pub completed_orders: u64,
    pub low_stock_items: u64,
}
