//! Shelter inventory: item name → (quantity, best-observed condition).
//!
//! `IndexMap` keeps insertion order (useful for a stable trace dump)
//! while matching `HashMap`'s O(1) lookup.

use indexmap::IndexMap;
use lastbreach_util::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InventoryItem {
    pub qty: f64,
    pub cond: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: IndexMap<Symbol, InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `qty` to `name`'s stock and raises its best-observed condition
    /// to `max(existing, cond)`. Quantity never decreases and condition
    /// never decreases as a result of `add`; a negative
    /// `qty` contributes nothing.
    pub fn add(&mut self, name: Symbol, qty: f64, cond: f64) {
        let qty = qty.max(0.0);
        let entry = self.items.entry(name).or_insert(InventoryItem::default());
        entry.qty += qty;
        entry.cond = entry.cond.max(cond);
    }

    /// Removes up to `qty` from `name`'s stock, floored at 0. Returns the
    /// amount actually removed.
    pub fn consume(&mut self, name: Symbol, qty: f64) -> f64 {
        match self.items.get_mut(&name) {
            Some(entry) => {
                let removed = entry.qty.min(qty.max(0.0));
                entry.qty -= removed;
                removed
            }
            None => 0.0,
        }
    }

    pub fn stock(&self, name: Symbol) -> f64 {
        self.items.get(&name).map(|i| i.qty).unwrap_or(0.0)
    }

    pub fn has(&self, name: Symbol) -> bool {
        self.stock(name) > 0.0
    }

    pub fn cond(&self, name: Symbol) -> f64 {
        self.items.get(&name).map(|i| i.cond).unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, InventoryItem)> + '_ {
        self.items.iter().map(|(&k, &v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lastbreach_util::Interner;

    #[test]
    fn add_never_decreases_stock_or_condition() {
        let mut interner = Interner::new();
        let food = interner.intern("food");
        let mut inv = Inventory::new();
        inv.add(food, 3.0, 2.0);
        inv.add(food, 1.0, 0.5);
        assert_eq!(inv.stock(food), 4.0);
        assert_eq!(inv.cond(food), 2.0);
        inv.add(food, 0.0, 5.0);
        assert_eq!(inv.cond(food), 5.0);
    }

    #[test]
    fn unknown_item_reads_as_absent() {
        let mut interner = Interner::new();
        let rope = interner.intern("rope");
        let inv = Inventory::new();
        assert_eq!(inv.stock(rope), 0.0);
        assert!(!inv.has(rope));
        assert_eq!(inv.cond(rope), 0.0);
    }

    #[test]
    fn consume_never_goes_negative() {
        let mut interner = Interner::new();
        let water = interner.intern("water");
        let mut inv = Inventory::new();
        inv.add(water, 2.0, 1.0);
        let removed = inv.consume(water, 5.0);
        assert_eq!(removed, 2.0);
        assert_eq!(inv.stock(water), 0.0);
    }

    #[quickcheck_macros::quickcheck]
    fn add_is_monotone(q1: f64, q2: f64) -> bool {
        if !q1.is_finite() || !q2.is_finite() {
            return true;
        }
        let mut interner = Interner::new();
        let item = interner.intern("widget");
        let mut inv = Inventory::new();
        inv.add(item, q1, 0.0);
        let before = inv.stock(item);
        inv.add(item, q2, 0.0);
        inv.stock(item) >= before
    }
}
