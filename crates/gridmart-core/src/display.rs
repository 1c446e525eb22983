//! # Display Module
//!
//! Fixed product storage on the grid: shelves, tables, chilled counters
//! and refrigerators.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Kind            Tiers × Slots   Admitted category prefixes            │
//! │  ─────────────   ─────────────   ────────────────────────────────────  │
//! │  Shelf           2 × 4 = 8       dry goods (CER NDL SNK CAN CON SFT    │
//! │                                  JUC ALC CLE HOM HAR BOD DEN CLO       │
//! │                                  STN PET)                              │
//! │  Table           1 × 4 = 4       produce/bakery (FRU BRD EGG VEG)      │
//! │  ChilledCounter  1 × 3 = 3       chilled meat/seafood (CHK BEF SEA)    │
//! │  Refrigerator    3 × 3 = 9       dairy/frozen (FRZ CHS MLK)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! A flat display is a single tier; tiered and flat kinds share one
//! contract. Admission is decided purely by the serial prefix, checked
//! atomically with the insertion. An empty prefix (short serial) is
//! rejected everywhere.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::ProductHandle;
use crate::error::{EngineError, EngineResult};

// =============================================================================
// Display Kind
// =============================================================================

/// Serial prefixes a Shelf admits: dry food staples plus general goods.
const SHELF_PREFIXES: &[&str] = &[
    "CER", "NDL", "SNK", "CAN", "CON", "SFT", "JUC", "ALC", // food/drink aisles
    "CLE", "HOM", "HAR", "BOD", "DEN", "CLO", "STN", "PET", // non-food aisles
];

/// Serial prefixes a Table admits: fresh produce and bakery.
const TABLE_PREFIXES: &[&str] = &["FRU", "BRD", "EGG", "VEG"];

/// Serial prefixes a ChilledCounter admits: chilled meats and seafood.
const CHILLED_PREFIXES: &[&str] = &["CHK", "BEF", "SEA"];

/// Serial prefixes a Refrigerator admits: dairy and frozen goods.
const REFRIGERATOR_PREFIXES: &[&str] = &["FRZ", "CHS", "MLK"];

/// The closed set of display variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DisplayKind {
    Shelf,
    Table,
    ChilledCounter,
    Refrigerator,
}

impl DisplayKind {
    /// Number of tiers (flat kinds have exactly one).
    pub const fn tier_count(&self) -> usize {
        match self {
            DisplayKind::Shelf => 2,
            DisplayKind::Table => 1,
            DisplayKind::ChilledCounter => 1,
            DisplayKind::Refrigerator => 3,
        }
    }

    /// Slots per tier.
    pub const fn tier_capacity(&self) -> usize {
        match self {
            DisplayKind::Shelf => 4,
            DisplayKind::Table => 4,
            DisplayKind::ChilledCounter => 3,
            DisplayKind::Refrigerator => 3,
        }
    }

    /// Total capacity across all tiers.
    pub const fn capacity(&self) -> usize {
        self.tier_count() * self.tier_capacity()
    }

    /// The admission allow-set for this kind.
    pub const fn allowed_prefixes(&self) -> &'static [&'static str] {
        match self {
            DisplayKind::Shelf => SHELF_PREFIXES,
            DisplayKind::Table => TABLE_PREFIXES,
            DisplayKind::ChilledCounter => CHILLED_PREFIXES,
            DisplayKind::Refrigerator => REFRIGERATOR_PREFIXES,
        }
    }

    /// Whether a product with this serial prefix may be stored here.
    ///
    /// `""` (short or missing serial) is in no allow-set.
    pub fn admits(&self, prefix: &str) -> bool {
        self.allowed_prefixes().contains(&prefix)
    }
}

// =============================================================================
// Display
// =============================================================================

/// A stock-holding grid tile.
///
/// The `address` is a human-readable location string ("GF, R4C2") used by
/// the product-search terminal to report where something is shelved.
#[derive(Debug, Clone)]
pub struct Display {
    kind: DisplayKind,
    address: String,
    tiers: Vec<Vec<ProductHandle>>,
}

impl Display {
    /// Creates an empty display of the given kind.
    pub fn new(kind: DisplayKind, address: impl Into<String>) -> Self {
        Display {
            kind,
            address: address.into(),
            tiers: vec![Vec::with_capacity(kind.tier_capacity()); kind.tier_count()],
        }
    }

    #[inline]
    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    /// Location string for search results.
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Tier contents, for the presentation layer's stock dialogs.
    #[inline]
    pub fn tiers(&self) -> &[Vec<ProductHandle>] {
        &self.tiers
    }

    /// Total number of stored products across all tiers.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }

    /// True iff every tier is at capacity.
    pub fn is_full(&self) -> bool {
        self.tiers
            .iter()
            .all(|tier| tier.len() >= self.kind.tier_capacity())
    }

    /// Stores a product on the first tier with remaining capacity.
    ///
    /// Admission (serial prefix in the allow-set) and capacity are checked
    /// before any mutation; a denial leaves the display untouched.
    pub fn stock(&mut self, item: ProductHandle) -> EngineResult<()> {
        let prefix = item.serial_prefix();
        if !self.kind.admits(prefix) {
            return Err(EngineError::NotAllowedOnDisplay {
                prefix: prefix.to_string(),
                kind: self.kind,
            });
        }

        let capacity = self.kind.tier_capacity();
        match self.tiers.iter_mut().find(|tier| tier.len() < capacity) {
            Some(tier) => {
                tier.push(item);
                Ok(())
            }
            None => Err(EngineError::DisplayFull { kind: self.kind }),
        }
    }

    /// Removes and returns the product at `(tier, slot)`.
    pub fn take(&mut self, tier: usize, slot: usize) -> EngineResult<ProductHandle> {
        let tier_items = self.tiers.get_mut(tier).ok_or(EngineError::ProductNotFound)?;
        if slot >= tier_items.len() {
            return Err(EngineError::ProductNotFound);
        }
        Ok(tier_items.remove(slot))
    }

    /// Puts a product back at the exact slot a failed take removed it
    /// from. No admission or capacity check: the slot was just vacated.
    pub fn restore(&mut self, tier: usize, slot: usize, item: ProductHandle) {
        if let Some(tier_items) = self.tiers.get_mut(tier) {
            let slot = slot.min(tier_items.len());
            tier_items.insert(slot, item);
        }
    }

    /// Case-insensitive substring match over all tiers.
    pub fn contains_by_name(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.tiers
            .iter()
            .flatten()
            .any(|p| p.name.to_lowercase().contains(&needle))
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

    fn cereal() -> ProductHandle {
        Product::new("CER001", "Koko Krunch", Money::from_pesos(120), true, false)
    }

    fn mango() -> ProductHandle {
        Product::new("FRU002", "Phil. Mangoes", Money::from_pesos(180), true, false)
    }

    #[test]
    fn test_kind_geometry() {
        assert_eq!(DisplayKind::Shelf.capacity(), 8);
        assert_eq!(DisplayKind::Table.capacity(), 4);
        assert_eq!(DisplayKind::ChilledCounter.capacity(), 3);
        assert_eq!(DisplayKind::Refrigerator.capacity(), 9);
    }

    #[test]
    fn test_admission_by_prefix() {
        assert!(DisplayKind::Shelf.admits("ALC"));
        assert!(DisplayKind::Table.admits("FRU"));
        assert!(DisplayKind::Refrigerator.admits("MLK"));
        assert!(DisplayKind::ChilledCounter.admits("SEA"));

        assert!(!DisplayKind::Shelf.admits("FRU"));
        assert!(!DisplayKind::Refrigerator.admits("ALC"));
        // Empty prefix (short serial) rejected everywhere
        assert!(!DisplayKind::Shelf.admits(""));
        assert!(!DisplayKind::Table.admits(""));
    }

    #[test]
    fn test_type_denial_leaves_display_untouched() {
        let mut fridge = Display::new(DisplayKind::Refrigerator, "2F, R1C3");
        let err = fridge.stock(mango()).unwrap_err();
        assert!(matches!(err, EngineError::NotAllowedOnDisplay { .. }));
        assert!(fridge.is_empty());
    }

    #[test]
    fn test_shelf_full_after_eight() {
        // Scenario D: both tiers full, a 9th allowed item is rejected
        let mut shelf = Display::new(DisplayKind::Shelf, "GF, R4C2");
        let item = cereal();
        for _ in 0..8 {
            shelf.stock(item.clone()).unwrap();
        }
        assert!(shelf.is_full());
        assert_eq!(shelf.tiers()[0].len(), 4);
        assert_eq!(shelf.tiers()[1].len(), 4);

        let err = shelf.stock(item.clone()).unwrap_err();
        assert_eq!(err, EngineError::DisplayFull { kind: DisplayKind::Shelf });
        assert_eq!(shelf.len(), 8);
    }

    #[test]
    fn test_stock_fills_first_tier_first() {
        let mut shelf = Display::new(DisplayKind::Shelf, "GF, R4C2");
        let item = cereal();
        for _ in 0..5 {
            shelf.stock(item.clone()).unwrap();
        }
        // First tier filled to 4, fifth item overflows into tier 1
        assert_eq!(shelf.tiers()[0].len(), 4);
        assert_eq!(shelf.tiers()[1].len(), 1);
    }

    #[test]
    fn test_take_and_restore() {
        let mut table = Display::new(DisplayKind::Table, "GF, R4C10");
        table.stock(mango()).unwrap();
        let taken = table.take(0, 0).unwrap();
        assert!(table.is_empty());

        table.restore(0, 0, taken);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_take_from_empty_slot() {
        let mut table = Display::new(DisplayKind::Table, "GF, R4C10");
        assert_eq!(table.take(0, 0).unwrap_err(), EngineError::ProductNotFound);
        assert_eq!(table.take(5, 0).unwrap_err(), EngineError::ProductNotFound);
    }

    #[test]
    fn test_contains_by_name_spans_tiers() {
        let mut shelf = Display::new(DisplayKind::Shelf, "GF, R4C2");
        for _ in 0..4 {
            shelf.stock(cereal()).unwrap(); // fill tier 0
        }
        let oats = Product::new("CER002", "Quaker Oats", Money::from_pesos(95), true, false);
        shelf.stock(oats).unwrap(); // lands on tier 1

        assert!(shelf.contains_by_name("quaker"));
        assert!(shelf.contains_by_name("KRUNCH"));
        assert!(!shelf.contains_by_name("mango"));
    }
}
