//! Full/custom-amount calculator
//!
//! Default is the full remaining balance; a keypad-entered value pays a
//! custom amount instead. On submit the amount must satisfy
//! `0 < amount <= remaining + tolerance`, otherwise the proposal is refused.

use super::{SplitCalculator, validate_open_order};
use crate::orders::error::OrderError;
use crate::orders::money::{self, to_f64};
use shared::order::{Order, PaymentInput, PaymentKind, PaymentMethod};

#[derive(Debug, Clone)]
pub struct PayFullAction {
    /// Custom keypad amount; `None` pays the remaining balance in full.
    pub amount: Option<f64>,
    pub method: PaymentMethod,
}

impl PayFullAction {
    /// Pay everything that remains.
    pub fn remaining(method: PaymentMethod) -> Self {
        Self {
            amount: None,
            method,
        }
    }

    /// Pay a user-entered amount.
    pub fn custom(amount: f64, method: PaymentMethod) -> Self {
        Self {
            amount: Some(amount),
            method,
        }
    }
}

impl SplitCalculator for PayFullAction {
    fn propose(&self, order: &Order) -> Result<PaymentInput, OrderError> {
        validate_open_order(order)?;

        // Keypad values and the pay-remaining default both record as FULL
        let amount = match self.amount {
            Some(custom) => custom,
            None => to_f64(money::remaining_unpaid(order)),
        };

        if !amount.is_finite() || amount <= 0.0 {
            return Err(OrderError::InvalidAmount);
        }
        money::ensure_within_remaining(order, amount)?;

        Ok(PaymentInput {
            amount,
            method: self.method,
            kind: PaymentKind::Full,
        })
    }
}
