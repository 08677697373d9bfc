//! Split-strategy calculators
//!
//! Four independent calculators, one per payment mode:
//! - **PayFull**: remaining balance or a keypad-entered custom amount
//! - **PayByPerson**: equal division of the remaining balance
//! - **PayByItems**: settle specific item units
//! - **PayShare**: flexible-shares session (setup lives in `share_split`)
//!
//! Each calculator is a pure function of the order snapshot that proposes a
//! `PaymentInput`; none of them touches the ledger. A proposal is refused
//! (no ledger call) whenever the amount is non-positive or exceeds the
//! remaining balance plus tolerance — global conservation of the order
//! total is enforced here, before anything is appended.

mod pay_by_items;
mod pay_by_person;
mod pay_full;
mod share_split;

pub use pay_by_items::PayByItemsAction;
pub use pay_by_person::{PayByPersonAction, PersonSplitSession};
pub use pay_full::PayFullAction;
pub use share_split::{PayShareAction, start_share_split};

use crate::orders::error::OrderError;
use shared::order::{Order, PaymentInput};

/// A split-strategy calculator: derives a chargeable amount (plus strategy
/// metadata) from the order and its ledger history.
pub trait SplitCalculator {
    fn propose(&self, order: &Order) -> Result<PaymentInput, OrderError>;
}

/// PaymentAction enum - dispatches to concrete calculator implementations
#[derive(Debug, Clone)]
pub enum PaymentAction {
    Full(PayFullAction),
    Person(PayByPersonAction),
    Items(PayByItemsAction),
    Share(PayShareAction),
}

impl SplitCalculator for PaymentAction {
    fn propose(&self, order: &Order) -> Result<PaymentInput, OrderError> {
        match self {
            PaymentAction::Full(action) => action.propose(order),
            PaymentAction::Person(action) => action.propose(order),
            PaymentAction::Items(action) => action.propose(order),
            PaymentAction::Share(action) => action.propose(order),
        }
    }
}

// ============================================================================
// Shared validation
// ============================================================================

/// Closed orders are terminal: no calculator may propose against one.
pub(super) fn validate_open_order(order: &Order) -> Result<(), OrderError> {
    if order.is_closed() {
        return Err(OrderError::OrderAlreadyClosed(order.table_id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
