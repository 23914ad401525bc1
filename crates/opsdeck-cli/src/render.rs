// SPDX-License-Identifier: Apache-2.0

use crate::surfaces::{AdminDashboard, UserDashboard};
use opsdeck_model::{InventoryItem, Order};
use opsdeck_sync::Snapshot;
use std::fmt::Write as _;

pub fn render_user(dashboard: &UserDashboard) -> String {
    let mut out = String::new();
    push_advisory(&mut out, dashboard.advisory.as_deref());
    let s = dashboard.summary;
    let _ = writeln!(
        out,
        "orders: {} total, {} pending, {} completed | low stock: {}{}",
        s.total_orders,
        s.pending_orders,
        s.completed_orders,
        s.low_stock_items,
        if dashboard.summary_degraded {
            " (local)"
        } else {
            ""
        }
    );
    let _ = writeln!(out, "inventory quick view:");
    push_inventory_rows(&mut out, &dashboard.quick_view);
    out
}

pub fn render_admin(dashboard: &AdminDashboard) -> String {
    let mut out = String::new();
    push_advisory(&mut out, dashboard.advisory.as_deref());
    let _ = writeln!(
        out,
        "healthz: {} | readyz: {}",
        dashboard.health.healthz, dashboard.health.readyz
    );
    let s = dashboard.summary;
    let _ = writeln!(
        out,
        "orders: {} total, {} pending | low stock: {}{}",
        s.total_orders,
        s.pending_orders,
        s.low_stock_items,
        if dashboard.summary_degraded {
            " (local)"
        } else {
            ""
        }
    );
    if dashboard.low_stock.is_empty() {
        let _ = writeln!(out, "no low stock items");
    } else {
        let _ = writeln!(out, "low stock alerts:");
        push_inventory_rows(&mut out, &dashboard.low_stock);
    }
    out
}

pub fn render_orders(snapshot: &Snapshot<Order>) -> String {
    let mut out = String::new();
    push_advisory(&mut out, snapshot.last_error.as_deref());
    if snapshot.items.is_empty() {
        let _ = writeln!(out, "no orders found");
        return out;
    }
    let _ = writeln!(out, "{:>12}  {:<24} {:>6}  {}", "ID", "PRODUCT", "QTY", "STATUS");
    for order in &snapshot.items {
        let _ = writeln!(
            out,
            "{:>12}  {:<24} {:>6}  {}",
            order.id, order.product_name, order.quantity, order.status
        );
    }
    out
}

pub fn render_inventory(snapshot: &Snapshot<InventoryItem>) -> String {
    let mut out = String::new();
    push_advisory(&mut out, snapshot.last_error.as_deref());
    if snapshot.items.is_empty() {
        let _ = writeln!(out, "no inventory items");
        return out;
    }
    let _ = writeln!(
        out,
        "{:>12}  {:<24} {:>6} {:>6}  {}",
        "ID", "ITEM", "STOCK", "MIN", "STATUS"
    );
    push_inventory_rows(&mut out, &snapshot.items);
    out
}

fn push_inventory_rows(out: &mut String, items: &[InventoryItem]) {
    for item in items {
        let _ = writeln!(
            out,
            "{:>12}  {:<24} {:>6} {:>6}  {}",
            item.id,
            item.item_name,
            item.stock_qty,
            item.min_threshold,
            if item.is_low() { "LOW" } else { "OK" }
        );
    }
}

fn push_advisory(out: &mut String, advisory: Option<&str>) {
    if let Some(message) = advisory {
        let _ = writeln!(out, "advisory: {message}");
    }
}
