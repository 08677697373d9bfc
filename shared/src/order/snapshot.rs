//! Order snapshot - the read-only order value handed to collaborators
//!
//! Aggregates (`total`, `paid_amount`, `remaining_amount`) are computed on
//! demand from the items and the payment ledger; nothing is cached. These
//! plain-`f64` helpers are for display consumers — engine decisions
//! (overpayment guards, closure) go through the engine's decimal money
//! module.

use super::types::{OrderItem, PaymentKind, PaymentRecord, SplitState};
use crate::models::DiningTable;
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// No payments recorded yet
    #[default]
    Active,
    /// Partially paid
    PaymentPending,
    /// Fully paid (within tolerance) or manually closed; terminal
    Closed,
}

/// The aggregate of items, payments, and status for one table's visit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Table this order belongs to
    pub table_id: String,
    /// Table name snapshot (denormalized for display)
    pub table_name: String,
    /// Server name snapshot
    pub server: String,
    /// Currency code (e.g. "EUR")
    pub currency: String,
    /// Order lines, in the order they were taken
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Creation timestamp (epoch millis)
    pub created_at: i64,
    /// Payment ledger; insertion order == chronological order
    pub payments: Vec<PaymentRecord>,
    /// Flexible-shares session, when one is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_state: Option<SplitState>,
}

impl Order {
    /// Create a fresh order for a table: zero payments, status `Active`.
    pub fn new(table: &DiningTable, currency: impl Into<String>, items: Vec<OrderItem>) -> Self {
        Self {
            table_id: table.id.clone(),
            table_name: table.name.clone(),
            server: table.server.clone().unwrap_or_default(),
            currency: currency.into(),
            items,
            status: OrderStatus::Active,
            created_at: chrono::Utc::now().timestamp_millis(),
            payments: Vec::new(),
            split_state: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == OrderStatus::Active
    }

    pub fn is_closed(&self) -> bool {
        self.status == OrderStatus::Closed
    }

    /// Order total: sum of quantity x unit price over all lines.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.quantity as f64 * item.unit_price)
            .sum()
    }

    /// Amount collected so far: sum over the payment ledger.
    pub fn paid_amount(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Remaining balance, clamped to zero — never exposes a negative value
    /// even if the ledger overshoots within tolerance.
    pub fn remaining_amount(&self) -> f64 {
        (self.total() - self.paid_amount()).max(0.0)
    }

    /// Whether any non-product payment exists. Once true, the per-item
    /// strategy refuses to operate (the guard is directional: product
    /// payments do not block the other strategies).
    pub fn has_generic_payments(&self) -> bool {
        self.payments.iter().any(|p| p.kind.is_generic())
    }

    /// Units of `item_id` already settled via product-type payments.
    pub fn paid_item_quantity(&self, item_id: &str) -> i32 {
        self.payments
            .iter()
            .filter_map(|p| match &p.kind {
                PaymentKind::Product { items_paid } => Some(items_paid),
                _ => None,
            })
            .flatten()
            .filter(|id| id.as_str() == item_id)
            .count() as i32
    }

    /// Units of `item` still unpaid, recomputed from ledger history alone.
    pub fn remaining_item_quantity(&self, item: &OrderItem) -> i32 {
        (item.quantity - self.paid_item_quantity(&item.id)).max(0)
    }

    /// Payments newest-first, for audit display.
    pub fn payments_recent_first(&self) -> impl Iterator<Item = &PaymentRecord> {
        self.payments.iter().rev()
    }
}
