//! Domain errors
//!
//! Every error is a refusal: the operation did not happen and the order
//! value is unchanged. Nothing here is fatal and nothing leaves partial
//! state behind.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order not found for table: {0}")]
    OrderNotFound(String),

    #[error("Order already closed: {0}")]
    OrderAlreadyClosed(String),

    /// Proposed amount is not payable: non-positive, non-finite, or beyond
    /// the remaining balance plus tolerance.
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Selection asks for more units than remain unpaid on an item.
    #[error("Insufficient quantity")]
    InsufficientQuantity,

    /// Per-item mode refused because generic (non-product) payments already
    /// exist on this order.
    #[error("Item-based payment is disabled once generic payments exist")]
    ItemSplitBlocked,

    #[error("Share split not started")]
    ShareSplitNotStarted,

    #[error("Invalid shares: {0}")]
    InvalidShares(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
