#![forbid(unsafe_code)]
//! Reconciling stores for the dashboard resource collections.
//!
//! A store tries the remote gateway first and falls back to deterministic
//! local mutation when the gateway fails, so a load always produces a
//! renderable snapshot and the dashboard stays interactive with the backend
//! down. Fallback data comes from an injected seed provider, never from
//! hidden module constants.

mod fake;
mod ids;
mod seeds;
mod store;

pub use fake::FakeGateway;
pub use ids::LocalIdAllocator;
pub use seeds::{default_inventory_seeds, default_order_seeds, FallbackSeeds};
pub use store::{ReconcilingStore, Snapshot, SyncPhase};

pub const CRATE_NAME: &str = "opsdeck-sync";
