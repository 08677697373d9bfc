//! Order engine for the bill manager
//!
//! - **money**: decimal arithmetic, tolerance, and payment validation
//! - **actions**: split-strategy calculators (one per payment mode)
//! - **ledger**: append-only payment ledger + order state machine
//! - **manager**: in-memory table/order repository, the single writer
//! - **seed**: configuration-time tables and the demo order
//!
//! # Payment Flow
//!
//! ```text
//! PaymentAction ──propose()──▶ PaymentInput ──append_payment()──▶ Order'
//!      │                            │                               │
//!  validates mode,            no id/timestamp              status recomputed,
//!  amount ≤ remaining+ε       assigned yet                 split session updated
//! ```
//!
//! Calculators never touch the ledger; they only propose. The ledger append
//! and the status transition are one atomic update — no caller ever observes
//! an order with the payment recorded but the status stale.

pub mod actions;
pub mod error;
pub mod ledger;
pub mod manager;
pub mod money;
pub mod seed;

// Re-exports
pub use actions::PaymentAction;
pub use error::OrderError;
pub use manager::TableManager;
