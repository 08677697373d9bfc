//! Order domain types
//!
//! This module provides the types for the order/payment domain:
//! - Inputs: payment proposals produced by split-strategy calculators
//! - Records: immutable payment facts stored in the order's ledger
//! - Snapshots: the order value handed to collaborators after every mutation

pub mod snapshot;
pub mod types;

// Re-exports
pub use snapshot::{Order, OrderStatus};
pub use types::*;
