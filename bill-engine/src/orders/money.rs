//! Money calculation utilities using rust_decimal for precision
//!
//! All aggregation and comparison is done with `Decimal` internally and
//! converted back to `f64` for the snapshot types. Stored amounts stay
//! `f64`; `Decimal` is the computation domain.

use crate::orders::error::OrderError;
use rust_decimal::prelude::*;
use shared::order::{Order, PaymentInput, PaymentRecord};

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01 currency unit)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed payment amount
const MAX_PAYMENT_AMOUNT: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Order total: sum of quantity x unit price over all lines.
pub fn order_total(order: &Order) -> Decimal {
    order
        .items
        .iter()
        .map(|item| to_decimal(item.unit_price) * Decimal::from(item.quantity))
        .sum()
}

/// Sum payment amounts with precise arithmetic.
pub fn sum_payments(payments: &[PaymentRecord]) -> Decimal {
    payments.iter().map(|p| to_decimal(p.amount)).sum()
}

/// Remaining unpaid balance, clamped to zero.
pub fn remaining_unpaid(order: &Order) -> Decimal {
    (order_total(order) - sum_payments(&order.payments)).max(Decimal::ZERO)
}

/// Check if payment is sufficient to settle a required amount.
///
/// Returns true if paid >= required - 0.01.
pub fn is_payment_sufficient(paid: Decimal, required: Decimal) -> bool {
    paid >= required - MONEY_TOLERANCE
}

/// Compare two monetary values for equality (within 0.01 tolerance).
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}

/// Validate a payment proposal before it reaches the ledger.
///
/// Amount must be finite, strictly positive, and within bounds.
pub fn validate_payment(payment: &PaymentInput) -> Result<(), OrderError> {
    if !payment.amount.is_finite() {
        return Err(OrderError::InvalidAmount);
    }
    if payment.amount <= 0.0 {
        return Err(OrderError::InvalidAmount);
    }
    if payment.amount > MAX_PAYMENT_AMOUNT {
        return Err(OrderError::InvalidOperation(format!(
            "payment amount exceeds maximum allowed ({}), got {}",
            MAX_PAYMENT_AMOUNT, payment.amount
        )));
    }
    Ok(())
}

/// Guard used by every calculator: a proposal may not exceed the remaining
/// balance plus tolerance.
pub fn ensure_within_remaining(order: &Order, amount: f64) -> Result<(), OrderError> {
    if to_decimal(amount) > remaining_unpaid(order) + MONEY_TOLERANCE {
        return Err(OrderError::InvalidAmount);
    }
    Ok(())
}
