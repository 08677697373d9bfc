//! Per-person equal-split calculator
//!
//! "One person at a time pays their equal share of what's left." The share
//! is recalculated fresh for every payment, since the remaining balance
//! shrinks as people pay. The number of people still owing is
//! calculator-local state (`PersonSplitSession`), never persisted on the
//! order.

use super::{SplitCalculator, validate_open_order};
use crate::orders::error::OrderError;
use crate::orders::money::{self, to_f64};
use shared::order::{Order, PaymentInput, PaymentKind, PaymentMethod};

#[derive(Debug, Clone)]
pub struct PayByPersonAction {
    /// People still owing; the remaining balance is divided by this.
    pub person_count: i32,
    /// Zero-based index of the person paying now (audit metadata).
    pub person_index: i32,
    pub method: PaymentMethod,
}

impl SplitCalculator for PayByPersonAction {
    fn propose(&self, order: &Order) -> Result<PaymentInput, OrderError> {
        validate_open_order(order)?;

        if self.person_count < 1 {
            return Err(OrderError::InvalidOperation(format!(
                "person count must be at least 1, got {}",
                self.person_count
            )));
        }

        let remaining = to_f64(money::remaining_unpaid(order));
        let amount = remaining / self.person_count as f64;
        if amount <= 0.0 {
            return Err(OrderError::InvalidAmount);
        }
        money::ensure_within_remaining(order, amount)?;

        Ok(PaymentInput {
            amount,
            method: self.method,
            kind: PaymentKind::Person {
                person_index: self.person_index,
            },
        })
    }
}

/// Calculator-local session state for the per-person mode
///
/// Tracks how many people still owe. After each successful payment the
/// counter decrements with a floor of 1, so the last person always pays the
/// (recalculated) full remainder of their share.
#[derive(Debug, Clone)]
pub struct PersonSplitSession {
    people: i32,
    paid: i32,
}

impl PersonSplitSession {
    pub fn new(people: i32) -> Self {
        Self {
            people: people.max(1),
            paid: 0,
        }
    }

    /// User-adjustable headcount, minimum 1.
    pub fn set_people(&mut self, people: i32) {
        self.people = people.max(1);
    }

    pub fn people(&self) -> i32 {
        self.people
    }

    /// The action for the next person in line.
    pub fn action(&self, method: PaymentMethod) -> PayByPersonAction {
        PayByPersonAction {
            person_count: self.people,
            person_index: self.paid,
            method,
        }
    }

    /// Record a successful payment: one fewer person owes (floor 1).
    pub fn record_success(&mut self) {
        if self.people > 1 {
            self.people -= 1;
        }
        self.paid += 1;
    }
}
