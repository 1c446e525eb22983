//! # Equipment Module
//!
//! Carts and baskets: the movable containers a shopper pushes around.
//!
//! ## Invariants
//! - `len() <= capacity()` at all times, enforced at insertion - a full
//!   container rejects the add, it never truncates
//! - Any product is admitted (type rules belong to displays)
//! - Duplicate placements of the same catalog entry are legal

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{same_item, ProductHandle};
use crate::error::{EngineError, EngineResult};
use crate::{BASKET_CAPACITY, CART_CAPACITY};

// =============================================================================
// Equipment Kind
// =============================================================================

/// The two kinds of shopping equipment a station can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    /// Large rolling cart, capacity 30.
    Cart,
    /// Hand basket, capacity 15.
    Basket,
}

impl EquipmentKind {
    /// Maximum number of products this kind can hold.
    pub const fn capacity(&self) -> usize {
        match self {
            EquipmentKind::Cart => CART_CAPACITY,
            EquipmentKind::Basket => BASKET_CAPACITY,
        }
    }
}

// =============================================================================
// Equipment
// =============================================================================

/// A capacity-bounded flat container of product placements.
#[derive(Debug, Clone)]
pub struct Equipment {
    kind: EquipmentKind,
    items: Vec<ProductHandle>,
}

impl Equipment {
    /// Creates empty equipment of the given kind.
    pub fn new(kind: EquipmentKind) -> Self {
        Equipment {
            kind,
            items: Vec::with_capacity(kind.capacity()),
        }
    }

    /// The equipment kind (decides capacity and which station accepts it).
    #[inline]
    pub fn kind(&self) -> EquipmentKind {
        self.kind
    }

    /// Maximum number of products.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.kind.capacity()
    }

    /// Current number of products.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the equipment holds nothing (a station precondition for
    /// returning it).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the equipment is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity()
    }

    /// Adds a product, rejecting the 31st item in a cart (or 16th in a
    /// basket) with no mutation.
    pub fn add(&mut self, item: ProductHandle) -> EngineResult<()> {
        if self.is_full() {
            return Err(EngineError::EquipmentFull {
                kind: self.kind,
                capacity: self.capacity(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the first placement of this exact item, if present.
    pub fn remove(&mut self, item: &ProductHandle) -> Option<ProductHandle> {
        let index = self.position_of(item)?;
        Some(self.items.remove(index))
    }

    /// Index of the first placement of this exact item.
    pub fn position_of(&self, item: &ProductHandle) -> Option<usize> {
        self.items.iter().position(|held| same_item(held, item))
    }

    /// Removes the placement at `index`. Used with [`Self::insert_at`] to
    /// restore state exactly when a cross-container transfer fails.
    pub fn remove_at(&mut self, index: usize) -> Option<ProductHandle> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Reinserts a placement at `index` without a capacity check.
    ///
    /// Only called to undo a removal that just happened, so the slot is
    /// guaranteed free.
    pub fn insert_at(&mut self, index: usize, item: ProductHandle) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Current contents, in insertion order.
    #[inline]
    pub fn items(&self) -> &[ProductHandle] {
        &self.items
    }

    /// Case-insensitive substring match over current contents.
    pub fn contains_by_name(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.items
            .iter()
            .any(|p| p.name.to_lowercase().contains(&needle))
    }

    /// Drops every placement (checkout finalization).
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    fn snack() -> ProductHandle {
        Product::new("SNK001", "Lay's Chips", Money::from_pesos(55), true, false)
    }

    #[test]
    fn test_capacities() {
        assert_eq!(EquipmentKind::Cart.capacity(), 30);
        assert_eq!(EquipmentKind::Basket.capacity(), 15);
    }

    #[test]
    fn test_cart_rejects_31st_item() {
        // Scenario A from the acceptance checklist
        let mut cart = Equipment::new(EquipmentKind::Cart);
        let item = snack();
        for _ in 0..30 {
            cart.add(item.clone()).unwrap();
        }
        assert!(cart.is_full());

        let err = cart.add(item.clone()).unwrap_err();
        assert_eq!(
            err,
            EngineError::EquipmentFull {
                kind: EquipmentKind::Cart,
                capacity: 30
            }
        );
        assert_eq!(cart.len(), 30); // no truncation, no overflow
    }

    #[test]
    fn test_duplicates_are_distinct_placements() {
        let mut basket = Equipment::new(EquipmentKind::Basket);
        let item = snack();
        basket.add(item.clone()).unwrap();
        basket.add(item.clone()).unwrap();
        basket.add(item.clone()).unwrap();
        assert_eq!(basket.len(), 3);

        // Removing the exact item takes one placement, not all three
        assert!(basket.remove(&item).is_some());
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut basket = Equipment::new(EquipmentKind::Basket);
        basket.add(snack()).unwrap();
        let stranger = snack(); // different allocation
        assert!(basket.remove(&stranger).is_none());
        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_remove_at_insert_at_roundtrip() {
        let mut basket = Equipment::new(EquipmentKind::Basket);
        let a = Product::new("SNK001", "Lay's Chips", Money::from_pesos(55), true, false);
        let b = Product::new("SNK002", "Choco Cookies", Money::from_pesos(110), true, false);
        let c = Product::new("SNK003", "Crackers", Money::from_pesos(45), true, false);
        basket.add(a.clone()).unwrap();
        basket.add(b.clone()).unwrap();
        basket.add(c.clone()).unwrap();

        let removed = basket.remove_at(1).unwrap();
        assert!(same_item(&removed, &b));
        basket.insert_at(1, removed);

        let order: Vec<_> = basket.items().iter().map(|p| p.serial.clone()).collect();
        assert_eq!(order, vec!["SNK001", "SNK002", "SNK003"]);
    }

    #[test]
    fn test_contains_by_name_is_case_insensitive() {
        let mut cart = Equipment::new(EquipmentKind::Cart);
        cart.add(snack()).unwrap();
        assert!(cart.contains_by_name("lay's"));
        assert!(cart.contains_by_name("CHIPS"));
        assert!(!cart.contains_by_name("bread"));
    }
}
