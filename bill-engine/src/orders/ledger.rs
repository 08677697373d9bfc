//! Payment ledger + order state machine
//!
//! The ledger is the only writer of payment records. Appending assigns the
//! id and timestamp, pushes the record, recomputes the order status, and
//! applies the flexible-shares session bookkeeping — all in one returned
//! value, so the payment and the status transition are never observed
//! independently.
//!
//! Every function here is pure old-order → new-order; callers swap the
//! result into the repository.

use crate::orders::error::OrderError;
use crate::orders::money;
use shared::order::{Order, OrderStatus, PaymentInput, PaymentKind, PaymentRecord};

/// Append a validated payment proposal to the order's ledger.
///
/// Preconditions owned by the ledger: the order is not closed and the
/// amount is strictly positive. Overpayment beyond tolerance is the
/// calculators' responsibility — the ledger does not re-check it.
pub fn append_payment(order: &Order, input: PaymentInput) -> Result<Order, OrderError> {
    if order.is_closed() {
        return Err(OrderError::OrderAlreadyClosed(order.table_id.clone()));
    }
    money::validate_payment(&input)?;

    let record = PaymentRecord {
        payment_id: uuid::Uuid::new_v4().to_string(),
        amount: input.amount,
        method: input.method,
        timestamp: chrono::Utc::now().timestamp_millis(),
        kind: input.kind,
    };
    let shares_paid = match &record.kind {
        PaymentKind::Share { share_count } => Some(*share_count),
        _ => None,
    };

    let mut updated = order.clone();
    updated.payments.push(record);
    updated.status = next_status(&updated);

    // Share-session bookkeeping: decrement on share payments, clear when no
    // shares remain. Closing by any path clears the session unconditionally.
    if let Some(shares) = shares_paid
        && let Some(state) = updated.split_state.take()
    {
        let remaining = state.remaining_shares - shares;
        if remaining > 0 {
            updated.split_state = Some(shared::order::SplitState {
                remaining_shares: remaining,
                ..state
            });
        }
    }
    if updated.status == OrderStatus::Closed {
        updated.split_state = None;
    }

    Ok(updated)
}

/// Status transition function, evaluated after every ledger append.
pub fn next_status(order: &Order) -> OrderStatus {
    let paid = money::sum_payments(&order.payments);
    let total = money::order_total(order);
    if money::is_payment_sufficient(paid, total) {
        OrderStatus::Closed
    } else if !order.payments.is_empty() {
        OrderStatus::PaymentPending
    } else {
        OrderStatus::Active
    }
}

/// Manual close (staff override): forces `Closed` regardless of balance and
/// always clears any split session. Closed orders are terminal.
pub fn close_order(order: &Order) -> Order {
    let mut updated = order.clone();
    updated.status = OrderStatus::Closed;
    updated.split_state = None;
    updated
}
