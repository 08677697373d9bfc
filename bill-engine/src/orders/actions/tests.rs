//! Cross-strategy calculator tests
//!
//! These chain calculator proposals through the ledger the way the manager
//! does, so they cover the interaction between strategies (mixed-mode guard,
//! share drift, conservation across sequences) rather than one calculator in
//! isolation.

use super::*;
use crate::orders::error::OrderError;
use crate::orders::ledger::append_payment;
use crate::orders::money;
use shared::models::DiningTable;
use shared::order::{
    ItemSelection, Order, OrderItem, OrderStatus, PaymentKind, PaymentMethod,
};

fn item(id: &str, quantity: i32, unit_price: f64) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        name: format!("Item {id}"),
        quantity,
        unit_price,
        note: None,
    }
}

/// Two lines: 2 x 10.00 + 1 x 80.00 = 100.00
fn test_order() -> Order {
    Order::new(
        &DiningTable::new("MESA-3", "Salón 1"),
        "EUR",
        vec![item("I1", 2, 10.00), item("I2", 1, 80.00)],
    )
}

fn pay(order: &Order, action: &PaymentAction) -> Order {
    let input = action.propose(order).unwrap();
    append_payment(order, input).unwrap()
}

// ============================================================================
// Full / custom amount
// ============================================================================

#[test]
fn test_pay_full_defaults_to_remaining_balance() {
    let order = test_order();
    let input = PayFullAction::remaining(PaymentMethod::Card)
        .propose(&order)
        .unwrap();
    assert_eq!(input.amount, 100.0);
    assert_eq!(input.kind, PaymentKind::Full);
}

#[test]
fn test_pay_full_recalculates_after_partial_payment() {
    let order = test_order();
    let order = pay(
        &order,
        &PaymentAction::Full(PayFullAction::custom(30.0, PaymentMethod::Cash)),
    );

    let input = PayFullAction::remaining(PaymentMethod::Cash)
        .propose(&order)
        .unwrap();
    assert_eq!(input.amount, 70.0);
}

#[test]
fn test_custom_amount_also_records_full_tag() {
    // A keypad-entered partial amount is still a full-tab payment; the
    // AMOUNT variant stays representable on the wire but is never produced
    // by this calculator.
    let order = test_order();
    let input = PayFullAction::custom(25.50, PaymentMethod::Cash)
        .propose(&order)
        .unwrap();
    assert_eq!(input.amount, 25.50);
    assert_eq!(input.kind, PaymentKind::Full);
}

#[test]
fn test_custom_amount_rejects_overpayment_beyond_tolerance() {
    let order = test_order();
    let result = PayFullAction::custom(100.02, PaymentMethod::Cash).propose(&order);
    assert_eq!(result, Err(OrderError::InvalidAmount));

    // Within tolerance is accepted
    assert!(PayFullAction::custom(100.01, PaymentMethod::Cash)
        .propose(&order)
        .is_ok());
}

#[test]
fn test_custom_amount_rejects_non_positive() {
    let order = test_order();
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = PayFullAction::custom(bad, PaymentMethod::Cash).propose(&order);
        assert_eq!(result, Err(OrderError::InvalidAmount));
    }
}

#[test]
fn test_calculators_refuse_closed_orders() {
    let mut order = test_order();
    order.status = OrderStatus::Closed;
    let result = PayFullAction::remaining(PaymentMethod::Cash).propose(&order);
    assert!(matches!(result, Err(OrderError::OrderAlreadyClosed(_))));
}

// ============================================================================
// Per-person equal split
// ============================================================================

#[test]
fn test_person_split_divides_remaining_balance() {
    let order = test_order();
    let action = PayByPersonAction {
        person_count: 4,
        person_index: 0,
        method: PaymentMethod::Cash,
    };
    let input = action.propose(&order).unwrap();
    assert_eq!(input.amount, 25.0);
    assert_eq!(input.kind, PaymentKind::Person { person_index: 0 });
}

#[test]
fn test_person_split_session_settles_to_zero() {
    // 100.00 across 3 people: 33.33…, 33.33…, 33.33… — the per-person
    // amount is recalculated from the live remainder each time, so the
    // last person absorbs the residual and the order closes exactly.
    let mut order = test_order();
    let mut session = PersonSplitSession::new(3);

    while order.status != OrderStatus::Closed {
        let action = session.action(PaymentMethod::Cash);
        order = pay(&order, &PaymentAction::Person(action));
        session.record_success();
    }

    assert_eq!(order.payments.len(), 3);
    // Sub-cent residual only
    assert_eq!(money::to_f64(money::remaining_unpaid(&order)), 0.0);
    let indices: Vec<i32> = order
        .payments
        .iter()
        .map(|p| match &p.kind {
            PaymentKind::Person { person_index } => *person_index,
            other => panic!("unexpected kind {other:?}"),
        })
        .collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_person_session_count_floors_at_one() {
    let mut session = PersonSplitSession::new(2);
    session.record_success();
    session.record_success();
    session.record_success();
    assert_eq!(session.people(), 1);

    session.set_people(0);
    assert_eq!(session.people(), 1);
}

#[test]
fn test_person_split_rejects_zero_people() {
    let order = test_order();
    let action = PayByPersonAction {
        person_count: 0,
        person_index: 0,
        method: PaymentMethod::Cash,
    };
    assert!(matches!(
        action.propose(&order),
        Err(OrderError::InvalidOperation(_))
    ));
}

// ============================================================================
// Per-item selection
// ============================================================================

fn select(pairs: &[(&str, i32)]) -> Vec<ItemSelection> {
    pairs
        .iter()
        .map(|(id, quantity)| ItemSelection {
            item_id: id.to_string(),
            quantity: *quantity,
        })
        .collect()
}

#[test]
fn test_item_split_prices_selected_units() {
    let order = test_order();
    let action = PayByItemsAction {
        selection: select(&[("I1", 2), ("I2", 1)]),
        method: PaymentMethod::Card,
    };
    let input = action.propose(&order).unwrap();
    assert_eq!(input.amount, 100.0);
    assert_eq!(
        input.kind,
        PaymentKind::Product {
            items_paid: vec![
                "I1".to_string(),
                "I1".to_string(),
                "I2".to_string()
            ]
        }
    );
}

#[test]
fn test_item_split_tracks_remaining_units_across_payments() {
    let order = test_order();
    let order = pay(
        &order,
        &PaymentAction::Items(PayByItemsAction {
            selection: select(&[("I1", 1)]),
            method: PaymentMethod::Cash,
        }),
    );

    // One unit of I1 left; asking for two must fail
    let overdraw = PayByItemsAction {
        selection: select(&[("I1", 2)]),
        method: PaymentMethod::Cash,
    };
    assert_eq!(
        overdraw.propose(&order),
        Err(OrderError::InsufficientQuantity)
    );

    let remainder = PayByItemsAction {
        selection: select(&[("I1", 1)]),
        method: PaymentMethod::Cash,
    };
    assert_eq!(remainder.propose(&order).unwrap().amount, 10.0);
}

#[test]
fn test_item_split_rejects_unknown_item_and_duplicates() {
    let order = test_order();

    let unknown = PayByItemsAction {
        selection: select(&[("I9", 1)]),
        method: PaymentMethod::Cash,
    };
    assert_eq!(
        unknown.propose(&order),
        Err(OrderError::ItemNotFound("I9".to_string()))
    );

    let duplicated = PayByItemsAction {
        selection: select(&[("I1", 1), ("I1", 1)]),
        method: PaymentMethod::Cash,
    };
    assert!(matches!(
        duplicated.propose(&order),
        Err(OrderError::InvalidOperation(_))
    ));
}

#[test]
fn test_generic_payment_blocks_item_split() {
    let order = test_order();
    let order = pay(
        &order,
        &PaymentAction::Full(PayFullAction::custom(5.0, PaymentMethod::Cash)),
    );

    let action = PayByItemsAction {
        selection: select(&[("I1", 1)]),
        method: PaymentMethod::Cash,
    };
    assert_eq!(action.propose(&order), Err(OrderError::ItemSplitBlocked));
}

#[test]
fn test_item_payments_do_not_block_other_modes() {
    // The guard is directional: a product payment leaves the generic modes
    // available, and the full-payment default still covers what's left.
    let order = test_order();
    let order = pay(
        &order,
        &PaymentAction::Items(PayByItemsAction {
            selection: select(&[("I1", 2)]),
            method: PaymentMethod::Cash,
        }),
    );

    let input = PayFullAction::remaining(PaymentMethod::Card)
        .propose(&order)
        .unwrap();
    assert_eq!(input.amount, 80.0);

    let closed = append_payment(&order, input).unwrap();
    assert_eq!(closed.status, OrderStatus::Closed);
}

// ============================================================================
// Flexible shares
// ============================================================================

#[test]
fn test_share_split_snapshots_per_share_amount() {
    let order = test_order();
    let order = start_share_split(&order, 4).unwrap();

    let state = order.split_state.as_ref().unwrap();
    assert_eq!(state.total_shares, 4);
    assert_eq!(state.remaining_shares, 4);
    assert_eq!(state.share_amount, 25.0);
}

#[test]
fn test_share_split_requires_at_least_two_shares() {
    let order = test_order();
    assert!(matches!(
        start_share_split(&order, 1),
        Err(OrderError::InvalidShares(_))
    ));
}

#[test]
fn test_share_payment_requires_active_session() {
    let order = test_order();
    let action = PayShareAction {
        shares: 1,
        method: PaymentMethod::Cash,
    };
    assert_eq!(action.propose(&order), Err(OrderError::ShareSplitNotStarted));
}

#[test]
fn test_share_overdraw_is_clamped_to_remaining_shares() {
    let order = test_order();
    let mut order = start_share_split(&order, 4).unwrap();
    order = pay(
        &order,
        &PaymentAction::Share(PayShareAction {
            shares: 3,
            method: PaymentMethod::Cash,
        }),
    );

    // One share left; asking for five settles exactly one
    let input = PayShareAction {
        shares: 5,
        method: PaymentMethod::Cash,
    }
    .propose(&order)
    .unwrap();
    assert_eq!(input.amount, 25.0);
    assert_eq!(input.kind, PaymentKind::Share { share_count: 1 });

    let order = append_payment(&order, input).unwrap();
    assert_eq!(order.status, OrderStatus::Closed);
    assert!(order.split_state.is_none());
}

#[test]
fn test_share_payment_rejects_non_positive_share_counts() {
    let order = start_share_split(&test_order(), 4).unwrap();
    let action = PayShareAction {
        shares: 0,
        method: PaymentMethod::Cash,
    };
    assert!(matches!(
        action.propose(&order),
        Err(OrderError::InvalidShares(_))
    ));
}

#[test]
fn test_restarting_share_split_overwrites_session() {
    let order = test_order();
    let order = start_share_split(&order, 4).unwrap();
    let mut order = pay(
        &order,
        &PaymentAction::Share(PayShareAction {
            shares: 1,
            method: PaymentMethod::Cash,
        }),
    );

    // Restart over the 75.00 remainder: fresh snapshot, last writer wins
    order = start_share_split(&order, 3).unwrap();
    let state = order.split_state.as_ref().unwrap();
    assert_eq!(state.total_shares, 3);
    assert_eq!(state.remaining_shares, 3);
    assert_eq!(state.share_amount, 25.0);
}

#[test]
fn test_share_amount_is_not_recomputed_after_interleaved_payment() {
    // An unrelated custom payment lands mid-session. The snapshot stays
    // fixed, so remaining_shares x share_amount now exceeds the live
    // remainder and the final share proposal is refused as overpayment.
    let order = test_order();
    let mut order = start_share_split(&order, 2).unwrap();
    order = pay(
        &order,
        &PaymentAction::Full(PayFullAction::custom(30.0, PaymentMethod::Cash)),
    );

    let state = order.split_state.as_ref().unwrap();
    assert_eq!(state.share_amount, 50.0);
    assert_eq!(state.remaining_shares, 2);

    // Both shares would settle 100.00 against a 70.00 remainder: refused
    let action = PayShareAction {
        shares: 2,
        method: PaymentMethod::Cash,
    };
    assert_eq!(action.propose(&order), Err(OrderError::InvalidAmount));

    // A single share still fits within the 70.00 remainder
    let input = PayShareAction {
        shares: 1,
        method: PaymentMethod::Cash,
    }
    .propose(&order)
    .unwrap();
    assert_eq!(input.amount, 50.0);
}

#[test]
fn test_odd_share_division_closes_within_tolerance() {
    // 109.50 seeded order, 50.00 paid up front, remainder 59.50 across 3
    // shares of 19.8333…: three unrounded share payments land within the
    // 0.01 closing tolerance.
    let order = crate::orders::seed::initial_order();
    let mut order = pay(
        &order,
        &PaymentAction::Full(PayFullAction::custom(50.0, PaymentMethod::Card)),
    );
    order = start_share_split(&order, 3).unwrap();

    for _ in 0..3 {
        order = pay(
            &order,
            &PaymentAction::Share(PayShareAction {
                shares: 1,
                method: PaymentMethod::Cash,
            }),
        );
    }

    assert_eq!(order.status, OrderStatus::Closed);
    assert!(order.split_state.is_none());
}

// ============================================================================
// Conservation across mixed sequences
// ============================================================================

#[test]
fn test_mixed_sequence_conserves_order_total() {
    let order = test_order();
    let order = pay(
        &order,
        &PaymentAction::Full(PayFullAction::custom(20.0, PaymentMethod::Cash)),
    );
    let order = pay(
        &order,
        &PaymentAction::Person(PayByPersonAction {
            person_count: 2,
            person_index: 0,
            method: PaymentMethod::Card,
        }),
    );
    let order = pay(
        &order,
        &PaymentAction::Full(PayFullAction::remaining(PaymentMethod::Cash)),
    );

    assert_eq!(order.status, OrderStatus::Closed);
    let paid = money::sum_payments(&order.payments);
    assert_eq!(money::to_f64(paid), 100.0);
}
