//! Per-item selection calculator
//!
//! Settles specific units of specific lines. The durable record is the flat
//! `items_paid` multiset (one item id per unit), so each item's remaining
//! quantity is recomputed deterministically from ledger history alone — no
//! separate mutable counter is persisted.
//!
//! Mixed-mode guard: this mode refuses to operate once any generic
//! (non-product) payment exists on the order. The guard is directional —
//! product payments do not block the other modes.

use super::{SplitCalculator, validate_open_order};
use crate::orders::error::OrderError;
use crate::orders::money::{self, to_decimal, to_f64};
use rust_decimal::Decimal;
use shared::order::{ItemSelection, Order, PaymentInput, PaymentKind, PaymentMethod};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct PayByItemsAction {
    /// Units to settle now, per item (quantity <= units still unpaid).
    pub selection: Vec<ItemSelection>,
    pub method: PaymentMethod,
}

impl SplitCalculator for PayByItemsAction {
    fn propose(&self, order: &Order) -> Result<PaymentInput, OrderError> {
        validate_open_order(order)?;

        if order.has_generic_payments() {
            return Err(OrderError::ItemSplitBlocked);
        }
        if self.selection.is_empty() {
            return Err(OrderError::InvalidOperation(
                "item-based payment requires at least one item".to_string(),
            ));
        }

        // Duplicate item ids would double-count amounts
        let mut seen = HashSet::new();
        for selected in &self.selection {
            if !seen.insert(selected.item_id.as_str()) {
                return Err(OrderError::InvalidOperation(format!(
                    "duplicate item '{}' in selection",
                    selected.item_id
                )));
            }
        }

        let mut amount = Decimal::ZERO;
        let mut items_paid = Vec::new();
        for selected in &self.selection {
            let item = order
                .items
                .iter()
                .find(|i| i.id == selected.item_id)
                .ok_or_else(|| OrderError::ItemNotFound(selected.item_id.clone()))?;

            if selected.quantity < 1 {
                return Err(OrderError::InvalidAmount);
            }
            if selected.quantity > order.remaining_item_quantity(item) {
                return Err(OrderError::InsufficientQuantity);
            }

            amount += to_decimal(item.unit_price) * Decimal::from(selected.quantity);
            // One entry per unit settled — the durable consumption record
            items_paid.extend(
                std::iter::repeat_with(|| item.id.clone()).take(selected.quantity as usize),
            );
        }

        let amount = to_f64(amount);
        if amount <= 0.0 {
            return Err(OrderError::InvalidAmount);
        }
        money::ensure_within_remaining(order, amount)?;

        Ok(PaymentInput {
            amount,
            method: self.method,
            kind: PaymentKind::Product { items_paid },
        })
    }
}
