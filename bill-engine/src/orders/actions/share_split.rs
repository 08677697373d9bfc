//! Flexible-shares strategy
//!
//! Two-phase: `start_share_split` snapshots the per-share amount into the
//! order's split session, then `PayShareAction` settles one or more shares
//! at that fixed amount. The snapshot is never recomputed mid-session — if
//! other payment types land in between, the remaining balance drifts from
//! `remaining_shares x share_amount` and that drift is intentional.

use super::{SplitCalculator, validate_open_order};
use crate::orders::error::OrderError;
use crate::orders::money::{self, to_f64};
use shared::order::{Order, PaymentInput, PaymentKind, PaymentMethod, SplitState};

/// Start (or restart) a shares session on an open order.
///
/// `share_amount` is the remaining balance at this instant divided by
/// `total_shares`. Starting while a session is active overwrites it —
/// last-writer-wins, no merge.
pub fn start_share_split(order: &Order, total_shares: i32) -> Result<Order, OrderError> {
    validate_open_order(order)?;

    if total_shares < 2 {
        return Err(OrderError::InvalidShares(format!(
            "total shares must be at least 2, got {total_shares}"
        )));
    }

    let remaining = to_f64(money::remaining_unpaid(order));
    let mut updated = order.clone();
    updated.split_state = Some(SplitState {
        total_shares,
        remaining_shares: total_shares,
        // Unrounded snapshot: shares settle at exactly this amount and the
        // residual is absorbed by the closing tolerance
        share_amount: remaining / total_shares as f64,
    });
    Ok(updated)
}

#[derive(Debug, Clone)]
pub struct PayShareAction {
    /// Shares this participant settles now; clamped into
    /// `1..=remaining_shares` (overdraw is clamped, never partially applied).
    pub shares: i32,
    pub method: PaymentMethod,
}

impl SplitCalculator for PayShareAction {
    fn propose(&self, order: &Order) -> Result<PaymentInput, OrderError> {
        validate_open_order(order)?;

        let state = order
            .split_state
            .as_ref()
            .ok_or(OrderError::ShareSplitNotStarted)?;

        if self.shares < 1 {
            return Err(OrderError::InvalidShares(format!(
                "shares to pay must be at least 1, got {}",
                self.shares
            )));
        }
        let shares = self.shares.min(state.remaining_shares);

        let amount = shares as f64 * state.share_amount;
        if amount <= 0.0 {
            return Err(OrderError::InvalidAmount);
        }
        money::ensure_within_remaining(order, amount)?;

        Ok(PaymentInput {
            amount,
            method: self.method,
            kind: PaymentKind::Share { share_count: shares },
        })
    }
}
