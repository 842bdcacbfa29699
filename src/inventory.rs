//! The settlement's shared stockpile of goods.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::goods::Good;

/// Shared inventory every supplied structure draws from and produces into,
/// plus the standing per-good import/export order books resolved once per
/// turn boundary.
#[derive(Resource, Debug, Clone, Default)]
pub struct Inventory {
    quantities: HashMap<Good, u32>,
    import_orders: HashMap<Good, u32>,
    export_orders: HashMap<Good, u32>,
}

impl Inventory {
    /// Current quantity of a good
    pub fn get(&self, good: Good) -> u32 {
        *self.quantities.get(&good).unwrap_or(&0)
    }

    pub fn add(&mut self, good: Good, qty: u32) {
        *self.quantities.entry(good).or_default() += qty;
    }

    /// Removes `qty` units of `good`.
    ///
    /// Callers gate on [`has_at_least`](Self::has_at_least) first; going
    /// negative indicates a broken supply check upstream and aborts.
    pub fn remove(&mut self, good: Good, qty: u32) {
        let current = self.get(good);
        assert!(
            current >= qty,
            "inventory underflow: removing {qty} {good} with only {current} on hand"
        );
        self.quantities.insert(good, current - qty);
    }

    pub fn has_at_least(&self, good: Good, qty: u32) -> bool {
        self.get(good) >= qty
    }

    /// Standing order to sell `qty` of `good` at every turn boundary.
    /// Zero clears the order.
    pub fn set_export_order(&mut self, good: Good, qty: u32) {
        if qty == 0 {
            self.export_orders.remove(&good);
        } else {
            self.export_orders.insert(good, qty);
        }
    }

    /// Standing order to buy `qty` of `good` at every turn boundary.
    /// Zero clears the order.
    pub fn set_import_order(&mut self, good: Good, qty: u32) {
        if qty == 0 {
            self.import_orders.remove(&good);
        } else {
            self.import_orders.insert(good, qty);
        }
    }

    /// Resolves the standing order books once.
    ///
    /// Succeeds only if every export order is covered by current stock, in
    /// which case all exports are deducted and all imports credited. On
    /// failure nothing changes and the turn may not close.
    pub fn try_import_export(&mut self) -> bool {
        let covered = self
            .export_orders
            .iter()
            .all(|(&good, &qty)| self.get(good) >= qty);
        if !covered {
            return false;
        }

        let exports: Vec<(Good, u32)> = self
            .export_orders
            .iter()
            .map(|(&good, &qty)| (good, qty))
            .collect();
        for (good, qty) in exports {
            self.remove(good, qty);
        }
        let imports: Vec<(Good, u32)> = self
            .import_orders
            .iter()
            .map(|(&good, &qty)| (good, qty))
            .collect();
        for (good, qty) in imports {
            self.add(good, qty);
        }
        true
    }
}
