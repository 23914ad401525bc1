#![forbid(unsafe_code)]
//! Dashboard surfaces for the opsdeck binary.
//!
//! Pure composition over the core crates: each surface wires stores and the
//! derived-view builder into one renderable snapshot. No entity state lives
//! here.

pub mod render;
pub mod surfaces;
