//! Shared types for order payments
//!
//! `PaymentKind` is a tagged union over the five split strategies, so each
//! payment carries only the metadata its strategy defines — a `SHARE`
//! payment cannot carry `items_paid`, a `FULL` payment cannot carry
//! `share_count`, and so on.

use serde::{Deserialize, Serialize};

// ============================================================================
// Payment Types
// ============================================================================

/// Payment method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
}

/// Split strategy tag + strategy-specific metadata
///
/// Internally tagged as `type` on the wire, matching the payment record
/// layout consumed by display collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentKind {
    /// Full/custom-amount payment (remaining balance or a keypad value)
    Full,
    /// Standalone custom amount; accepted on the wire but not produced by
    /// any calculator — the full/custom screen records keypad values as
    /// `Full`
    Amount,
    /// Specific units settled; one item id per unit paid
    Product { items_paid: Vec<String> },
    /// One person's equal share of the balance remaining at payment time
    Person { person_index: i32 },
    /// One or more shares of a flexible-shares session
    Share { share_count: i32 },
}

impl PaymentKind {
    /// Whether this payment settles the bill generically (by amount) rather
    /// than by naming specific item units.
    ///
    /// Any generic payment blocks the per-item strategy afterwards; the
    /// guard is directional — product payments block nothing.
    pub fn is_generic(&self) -> bool {
        !matches!(self, PaymentKind::Product { .. })
    }
}

/// Payment proposal produced by a split-strategy calculator
///
/// Carries no id or timestamp — those are assigned by the ledger when the
/// proposal is appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInput {
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(flatten)]
    pub kind: PaymentKind,
}

/// Immutable payment record in the order's ledger
///
/// Records are append-only: no edits or deletions once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    /// Ledger-assigned unique ID
    pub payment_id: String,
    /// Monetary amount paid (always > 0)
    pub amount: f64,
    pub method: PaymentMethod,
    /// Ledger-assigned creation timestamp (epoch millis)
    pub timestamp: i64,
    #[serde(flatten)]
    pub kind: PaymentKind,
}

// ============================================================================
// Split Session Types
// ============================================================================

/// Persistent session state for the flexible-shares strategy
///
/// `share_amount` is a snapshot fixed when the session starts and never
/// recomputed mid-session, even when other payment types land in between.
/// The session is cleared (the order's `split_state` becomes `None`) exactly
/// when `remaining_shares` reaches 0 or the order closes by any path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitState {
    /// Total shares chosen at session start (>= 2)
    pub total_shares: i32,
    /// Shares still unpaid; strictly decreases over the session
    pub remaining_shares: i32,
    /// Fixed per-share amount (remaining balance at start / total shares)
    pub share_amount: f64,
}

/// One line of a per-item payment selection: pay `quantity` units of the
/// referenced order item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSelection {
    pub item_id: String,
    pub quantity: i32,
}

// ============================================================================
// Order Line Types
// ============================================================================

/// Order line item
///
/// Immutable once the order is created — there are no mid-order menu edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Item ID, unique within the order
    pub id: String,
    /// Product name
    pub name: String,
    /// Ordered quantity (>= 1)
    pub quantity: i32,
    /// Unit price (non-negative)
    pub unit_price: f64,
    /// Kitchen note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OrderItem {
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }
}
