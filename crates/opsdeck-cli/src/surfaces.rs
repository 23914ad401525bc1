// SPDX-License-Identifier: Apache-2.0

use opsdeck_gateway::{HealthReport, HttpGateway};
use opsdeck_model::{InventoryItem, Order, Summary};
use opsdeck_sync::{FallbackSeeds, ReconcilingStore};
use serde::Serialize;

/// Rows shown in the inventory quick-view panel.
pub const QUICK_VIEW_ROWS: usize = 5;

/// Renderable state for the user landing page: summary tiles plus an
/// inventory quick view.
#[derive(Debug, Clone, Serialize)]
pub struct UserDashboard {
    pub summary: Summary,
    pub summary_degraded: bool,
    pub quick_view: Vec<InventoryItem>,
    pub advisory: Option<String>,
}

/// Renderable state for the admin page: health verdicts, summary tiles and
/// the low-stock table.
#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub health: HealthReport,
    pub summary: Summary,
    pub summary_degraded: bool,
    pub low_stock: Vec<InventoryItem>,
    pub advisory: Option<String>,
}

/// Issues the paired summary/inventory fetch concurrently and settles each
/// branch on its own, so a reachable summary endpoint renders real numbers
/// over fallback inventory instead of failing wholesale. When the summary
/// endpoint is down, the tiles are recomputed from the order seeds plus the
/// inventory snapshot rather than served from a stale constant.
pub async fn load_user_dashboard(
    gateway: &HttpGateway,
    inventory: &mut ReconcilingStore<InventoryItem>,
    order_seeds: &FallbackSeeds<Order>,
) -> UserDashboard {
    let (summary, ()) = tokio::join!(gateway.fetch_summary(), inventory.load());
    let snapshot = inventory.snapshot();
    let quick_view = opsdeck_views::top_n(&snapshot.items, QUICK_VIEW_ROWS);
    match summary {
        Ok(summary) => UserDashboard {
            summary,
            summary_degraded: false,
            quick_view,
            advisory: snapshot.last_error,
        },
        Err(_) => UserDashboard {
            summary: opsdeck_views::summary(&order_seeds.items(), &snapshot.items),
            summary_degraded: true,
            quick_view,
            advisory: Some(summary_advisory()),
        },
    }
}

pub async fn load_admin_dashboard(
    gateway: &HttpGateway,
    inventory: &mut ReconcilingStore<InventoryItem>,
    order_seeds: &FallbackSeeds<Order>,
) -> AdminDashboard {
    let health = gateway.probe_health().await;
    let (summary, ()) = tokio::join!(gateway.fetch_summary(), inventory.load());
    let snapshot = inventory.snapshot();
    let low_stock = opsdeck_views::low_stock(&snapshot.items);
    match summary {
        Ok(summary) => AdminDashboard {
            health,
            summary,
            summary_degraded: false,
            low_stock,
            advisory: snapshot.last_error,
        },
        Err(_) => AdminDashboard {
            health,
            summary: opsdeck_views::summary(&order_seeds.items(), &snapshot.items),
            summary_degraded: true,
            low_stock,
            advisory: Some(summary_advisory()),
        },
    }
}

fn summary_advisory() -> String {
    "summary unreachable; dashboard computed from local data".to_string()
}
