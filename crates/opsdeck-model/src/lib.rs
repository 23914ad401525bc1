#![forbid(unsafe_code)]
//! Opsdeck model SSOT.
//!
//! Wire shapes for the orders and inventory collections, their create/edit
//! drafts, and the [`Resource`] trait that ties an entity to its drafts.
//! Drafts are validated at construction so downstream layers only ever see
//! well-formed values.
//!
//! ```compile_fail
//! use opsdeck_model::OrderStatus;
//!
//! fn exhaustive_match(s: OrderStatus) -> &'static str {
//!     match s {
//!         OrderStatus::Pending => "p",
//!         OrderStatus::Completed => "c",
//!     }
//! }
//! ```

mod error;
mod inventory;
mod order;
mod resource;
mod summary;

pub use error::ParseError;
pub use inventory::{InventoryCreate, InventoryEdit, InventoryItem};
pub use order::{Order, OrderCreate, OrderEdit, OrderStatus};
pub use resource::Resource;
pub use summary::Summary;

pub const CRATE_NAME: &str = "opsdeck-model";
