//! Table/order manager
//!
//! Owns the floor map and the in-memory order store. All mutations follow
//! the same shape: load the current snapshot, compute the successor order as
//! a pure value, swap it in under a single write-lock hold, and return the
//! updated snapshot. Nothing is mutated in place, so a failed operation
//! leaves the stored order exactly as it was.

use crate::orders::actions::{PaymentAction, SplitCalculator};
use crate::orders::error::OrderError;
use crate::orders::{actions, ledger, seed};
use parking_lot::RwLock;
use shared::models::DiningTable;
use shared::order::Order;
use std::collections::HashMap;
use tracing::{debug, info};

pub struct TableManager {
    tables: Vec<DiningTable>,
    orders: RwLock<HashMap<String, Order>>,
}

impl TableManager {
    /// Manager pre-loaded with the demo floor map and its open order.
    pub fn with_seed_data() -> Self {
        let manager = Self {
            tables: seed::tables(),
            orders: RwLock::new(HashMap::new()),
        };
        manager.seed_orders();
        manager
    }

    fn seed_orders(&self) {
        let order = seed::initial_order();
        self.orders.write().insert(order.table_id.clone(), order);
    }

    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    /// Current snapshot of a table's order, if one is open or closed there.
    pub fn get_order(&self, table_id: &str) -> Option<Order> {
        self.orders.read().get(table_id).cloned()
    }

    /// Run a split-strategy calculator against the table's order and append
    /// the resulting payment to its ledger.
    pub fn pay(&self, table_id: &str, action: &PaymentAction) -> Result<Order, OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .get(table_id)
            .ok_or_else(|| OrderError::OrderNotFound(table_id.to_string()))?;

        let input = action.propose(order)?;
        debug!(table_id, amount = input.amount, "payment proposed");
        let updated = ledger::append_payment(order, input)?;
        info!(
            table_id,
            paid = updated.paid_amount(),
            status = ?updated.status,
            "payment recorded"
        );

        orders.insert(table_id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Begin (or restart) a flexible-shares session on the table's order.
    pub fn start_share_split(
        &self,
        table_id: &str,
        total_shares: i32,
    ) -> Result<Order, OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .get(table_id)
            .ok_or_else(|| OrderError::OrderNotFound(table_id.to_string()))?;

        let updated = actions::start_share_split(order, total_shares)?;
        info!(table_id, total_shares, "share split started");
        orders.insert(table_id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Staff override: close the table's order regardless of balance.
    pub fn close_table(&self, table_id: &str) -> Result<Order, OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .get(table_id)
            .ok_or_else(|| OrderError::OrderNotFound(table_id.to_string()))?;

        let updated = ledger::close_order(order);
        info!(table_id, "table closed");
        orders.insert(table_id.to_string(), updated.clone());
        Ok(updated)
    }

    /// Discard all orders and restore the seeded state.
    pub fn reset(&self) {
        self.orders.write().clear();
        self.seed_orders();
        info!("order store reset to seed data");
    }
}
