#![forbid(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use opsdeck_cli::{render, surfaces};
use opsdeck_gateway::{GatewayConfig, HttpGateway};
use opsdeck_model::{InventoryCreate, InventoryEdit, OrderCreate, OrderEdit, OrderStatus};
use opsdeck_sync::{default_inventory_seeds, default_order_seeds, ReconcilingStore};
use serde::Serialize;
use std::env;
use std::process::ExitCode as ProcessExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "opsdeck")]
#[command(about = "Operations dashboard over the orders/inventory API")]
struct Cli {
    /// API base URL; falls back to OPSDECK_BASE_URL, then the local default.
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Emit the snapshot as JSON instead of a rendered table.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily operations overview: summary tiles plus inventory quick view.
    User,
    /// Monitoring view: health probes, summary tiles, low-stock alerts.
    Admin,
    /// Orders collection.
    Orders {
        #[command(subcommand)]
        command: OrdersCommand,
    },
    /// Inventory collection.
    Inventory {
        #[command(subcommand)]
        command: InventoryCommand,
    },
}

#[derive(Subcommand)]
enum OrdersCommand {
    List,
    Create {
        #[arg(long)]
        product_name: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    Update {
        id: u64,
        #[arg(long)]
        product_name: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
    },
    Delete {
        id: u64,
    },
}

#[derive(Subcommand)]
enum InventoryCommand {
    List,
    Create {
        #[arg(long)]
        item_name: String,
        #[arg(long, default_value_t = 0)]
        stock_qty: u32,
        #[arg(long, default_value_t = 0)]
        min_threshold: u32,
    },
    Update {
        id: u64,
        #[arg(long)]
        stock_qty: Option<u32>,
        #[arg(long)]
        min_threshold: Option<u32>,
    },
    Delete {
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Pending,
    Completed,
}

impl From<StatusArg> for OrderStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => Self::Pending,
            StatusArg::Completed => Self::Completed,
        }
    }
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> ProcessExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ProcessExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ProcessExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let base_url = cli
        .base_url
        .unwrap_or_else(|| env_str("OPSDECK_BASE_URL", "http://127.0.0.1:5000/api"));
    let request_timeout = Duration::from_millis(env_u64("OPSDECK_TIMEOUT_MS", 10_000));
    let gateway = HttpGateway::new(GatewayConfig {
        base_url,
        request_timeout,
    })
    .map_err(|e| e.to_string())?;
    info!(base_url = %gateway.config().base_url, "gateway configured");

    match cli.command {
        Commands::User => {
            let mut inventory =
                ReconcilingStore::new(Arc::new(gateway.clone()), default_inventory_seeds());
            let dashboard =
                surfaces::load_user_dashboard(&gateway, &mut inventory, &default_order_seeds())
                    .await;
            emit(cli.json, &dashboard, render::render_user(&dashboard))
        }
        Commands::Admin => {
            let mut inventory =
                ReconcilingStore::new(Arc::new(gateway.clone()), default_inventory_seeds());
            let dashboard =
                surfaces::load_admin_dashboard(&gateway, &mut inventory, &default_order_seeds())
                    .await;
            emit(cli.json, &dashboard, render::render_admin(&dashboard))
        }
        Commands::Orders { command } => run_orders(gateway, cli.json, command).await,
        Commands::Inventory { command } => run_inventory(gateway, cli.json, command).await,
    }
}

async fn run_orders(
    gateway: HttpGateway,
    json: bool,
    command: OrdersCommand,
) -> Result<(), String> {
    let mut store = ReconcilingStore::new(Arc::new(gateway), default_order_seeds());
    match command {
        OrdersCommand::List => store.load().await,
        OrdersCommand::Create {
            product_name,
            quantity,
        } => {
            let draft = OrderCreate::new(&product_name, quantity).map_err(|e| e.to_string())?;
            store.load().await;
            store.create(draft).await;
        }
        OrdersCommand::Update {
            id,
            product_name,
            quantity,
            status,
        } => {
            store.load().await;
            let current = store
                .snapshot()
                .edit_buffer
                .get(&id)
                .cloned()
                .ok_or_else(|| format!("order {id} is not listed"))?;
            let draft = OrderEdit::new(
                product_name.as_deref().unwrap_or(&current.product_name),
                quantity.unwrap_or(current.quantity),
                status.map_or(current.status, OrderStatus::from),
            )
            .map_err(|e| e.to_string())?;
            store.edit(id, draft);
            store.update(id).await;
        }
        OrdersCommand::Delete { id } => {
            store.load().await;
            store.delete(id).await;
        }
    }
    emit(json, &store.snapshot(), render::render_orders(&store.snapshot()))
}

async fn run_inventory(
    gateway: HttpGateway,
    json: bool,
    command: InventoryCommand,
) -> Result<(), String> {
    let mut store = ReconcilingStore::new(Arc::new(gateway), default_inventory_seeds());
    match command {
        InventoryCommand::List => store.load().await,
        InventoryCommand::Create {
            item_name,
            stock_qty,
            min_threshold,
        } => {
            let draft = InventoryCreate::new(&item_name, stock_qty, min_threshold)
                .map_err(|e| e.to_string())?;
            store.load().await;
            store.create(draft).await;
        }
        InventoryCommand::Update {
            id,
            stock_qty,
            min_threshold,
        } => {
            store.load().await;
            let current = store
                .snapshot()
                .edit_buffer
                .get(&id)
                .copied()
                .ok_or_else(|| format!("inventory item {id} is not listed"))?;
            let draft = InventoryEdit::new(
                stock_qty.unwrap_or(current.stock_qty),
                min_threshold.unwrap_or(current.min_threshold),
            );
            store.edit(id, draft);
            store.update(id).await;
        }
        InventoryCommand::Delete { id } => {
            store.load().await;
            store.delete(id).await;
        }
    }
    emit(
        json,
        &store.snapshot(),
        render::render_inventory(&store.snapshot()),
    )
}

fn emit<T: Serialize>(json: bool, value: &T, rendered: String) -> Result<(), String> {
    if json {
        let payload = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
        println!("{payload}");
    } else {
        print!("{rendered}");
    }
    Ok(())
}
