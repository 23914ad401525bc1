// SPDX-License-Identifier: Apache-2.0

//! Surface composition against a scripted API: each fetch branch settles on
//! its own, so partial outages produce mixed snapshots instead of
//! all-or-nothing failures.

use opsdeck_cli::surfaces::{load_admin_dashboard, load_user_dashboard};
use opsdeck_gateway::{GatewayConfig, HttpGateway, ProbeStatus};
use opsdeck_sync::{default_inventory_seeds, default_order_seeds, ReconcilingStore};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone, Copy)]
struct ApiScript {
    healthz: bool,
    readyz: bool,
    summary: bool,
    inventory: bool,
}

impl ApiScript {
    const ALL_UP: Self = Self {
        healthz: true,
        readyz: true,
        summary: true,
        inventory: true,
    };
    const ALL_DOWN: Self = Self {
        healthz: false,
        readyz: false,
        summary: false,
        inventory: false,
    };
}

fn respond(path: &str, script: ApiScript) -> (&'static str, &'static str) {
    const OK: &str = "HTTP/1.1 200 OK";
    const FAIL: &str = "HTTP/1.1 500 Internal Server Error";
    if path.contains("/healthz") {
        return if script.healthz {
            (OK, r#"{"message": "alive"}"#)
        } else {
            (FAIL, "{}")
        };
    }
    if path.contains("/readyz") {
        return if script.readyz {
            (OK, r#"{"message": "ready"}"#)
        } else {
            (FAIL, "{}")
        };
    }
    if path.contains("/summary") {
        return if script.summary {
            (OK, r#"{"total_orders": 7, "pending_orders": 3, "low_stock_items": 2}"#)
        } else {
            (FAIL, "{}")
        };
    }
    if path.contains("/inventory") {
        return if script.inventory {
            (
                OK,
                r#"[{"id": 1, "item_name": "Steel", "stock_qty": 20, "min_threshold": 30}]"#,
            )
        } else {
            (FAIL, "{}")
        };
    }
    ("HTTP/1.1 404 Not Found", "{}")
}

async fn spawn_api(script: ApiScript) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub api");
    let addr = listener.local_addr().expect("stub api addr");
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).into_owned();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, body) = respond(&path, script);
                let response = format!(
                    "{status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    format!("http://{addr}/api")
}

async fn gateway_for(script: ApiScript) -> HttpGateway {
    let base_url = spawn_api(script).await;
    HttpGateway::new(GatewayConfig {
        base_url,
        ..GatewayConfig::default()
    })
    .expect("build gateway")
}

#[tokio::test]
async fn reachable_api_yields_fully_synced_admin_dashboard() {
    let gateway = gateway_for(ApiScript::ALL_UP).await;
    let mut inventory = ReconcilingStore::new(
        std::sync::Arc::new(gateway.clone()),
        default_inventory_seeds(),
    );

    let dashboard = load_admin_dashboard(&gateway, &mut inventory, &default_order_seeds()).await;

    assert_eq!(dashboard.health.healthz, ProbeStatus::Ok);
    assert_eq!(dashboard.health.readyz, ProbeStatus::Ok);
    assert!(!dashboard.summary_degraded);
    assert_eq!(dashboard.summary.total_orders, 7);
    assert_eq!(dashboard.low_stock.len(), 1, "served Steel row is low");
    assert!(dashboard.advisory.is_none());
}

#[tokio::test]
async fn health_probes_settle_independently() {
    let gateway = gateway_for(ApiScript {
        readyz: false,
        ..ApiScript::ALL_UP
    })
    .await;

    let report = gateway.probe_health().await;

    assert_eq!(report.healthz, ProbeStatus::Ok);
    assert_eq!(report.readyz, ProbeStatus::Fail);
    assert!(!report.all_ok());
}

#[tokio::test]
async fn mixed_outage_renders_real_summary_over_fallback_inventory() {
    let gateway = gateway_for(ApiScript {
        inventory: false,
        ..ApiScript::ALL_UP
    })
    .await;
    let mut inventory = ReconcilingStore::new(
        std::sync::Arc::new(gateway.clone()),
        default_inventory_seeds(),
    );

    let dashboard = load_user_dashboard(&gateway, &mut inventory, &default_order_seeds()).await;

    assert!(!dashboard.summary_degraded, "summary came from the server");
    assert_eq!(dashboard.summary.total_orders, 7);
    assert_eq!(
        dashboard.quick_view,
        default_inventory_seeds().items(),
        "quick view falls back to the seed rows"
    );
    assert!(dashboard.advisory.is_some());
}

#[tokio::test]
async fn full_outage_recomputes_summary_from_local_snapshots() {
    let gateway = gateway_for(ApiScript::ALL_DOWN).await;
    let mut inventory = ReconcilingStore::new(
        std::sync::Arc::new(gateway.clone()),
        default_inventory_seeds(),
    );

    let dashboard = load_user_dashboard(&gateway, &mut inventory, &default_order_seeds()).await;

    assert!(dashboard.summary_degraded);
    assert_eq!(dashboard.summary.total_orders, 4);
    assert_eq!(dashboard.summary.pending_orders, 2);
    assert_eq!(dashboard.summary.completed_orders, 2);
    assert_eq!(
        dashboard.summary.low_stock_items, 3,
        "derived from the fallback inventory, not a canned constant"
    );
    assert!(dashboard.advisory.is_some());
}
