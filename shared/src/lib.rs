//! Shared types for the bill-management engine
//!
//! Data-model types used across crates: dining tables, order lines,
//! payment records, and the order snapshot handed to collaborators.
//! This crate is pure data — no I/O, no arithmetic policy (monetary
//! precision lives in the engine crate).

pub mod models;
pub mod order;

// Re-exports
pub use models::DiningTable;
pub use order::{Order, OrderStatus};
pub use serde::{Deserialize, Serialize};
