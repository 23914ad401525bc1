#![forbid(unsafe_code)]
//! Remote gateway for the operations API.
//!
//! Every remote call resolves to `Result<_, GatewayError>`: timeouts,
//! refused connections, non-2xx statuses, and malformed bodies all collapse
//! into the one failure value, so callers branch on reachability and nothing
//! else.

use async_trait::async_trait;
use opsdeck_model::Resource;
use std::fmt::{Display, Formatter};

mod config;
mod health;
mod http;

pub use config::GatewayConfig;
pub use health::{HealthReport, ProbeStatus};
pub use http::HttpGateway;

pub const CRATE_NAME: &str = "opsdeck-gateway";

#[derive(Debug)]
pub struct GatewayError(pub String);

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GatewayError {}

/// Port for one remote resource collection.
///
/// Create returns `()` even though the server echoes the created entity:
/// callers re-sync with a fresh `list` instead of trusting the echo.
#[async_trait]
pub trait ResourceGateway<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<R>, GatewayError>;
    async fn create(&self, draft: &R::Create) -> Result<(), GatewayError>;
    async fn update(&self, id: u64, edit: &R::Edit) -> Result<(), GatewayError>;
    async fn delete(&self, id: u64) -> Result<(), GatewayError>;
}
