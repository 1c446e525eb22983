//! # Catalog Module
//!
//! Immutable product definitions and prefix-based classification.
//!
//! ## Classification
//! The first three characters of a product's serial number are its
//! category prefix: `BRD001` is bread, `ALC002` is alcohol. The prefix
//! alone decides which displays may store the product and whether the
//! take is age-gated. A serial shorter than three characters classifies
//! as "no prefix" and is rejected by every display.
//!
//! ## Handles, Not Copies
//! Products are shared read-only catalog entries. Placing one on a display
//! or into a cart moves a [`ProductHandle`] (an `Arc`), never a copy:
//! "remove this exact item" is handle identity, so three identical apples
//! stay three distinct placements.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Shared reference to a catalog product.
///
/// Cloning a handle moves a reference; the underlying [`Product`] is never
/// duplicated or mutated. [`same_item`] compares identity for removal.
pub type ProductHandle = Arc<Product>;

/// Identity comparison for product placements.
///
/// Two handles are the same *item* when they point at the same catalog
/// entry. Duplicate stock (the same entry placed three times) compares
/// equal, which matches the container contract: removal takes the first
/// matching placement, never all of them.
#[inline]
pub fn same_item(a: &ProductHandle, b: &ProductHandle) -> bool {
    Arc::ptr_eq(a, b)
}

// =============================================================================
// Product
// =============================================================================

/// An immutable product definition.
///
/// ## Flags
/// - `consumable`: meant to be eaten or drunk
/// - `beverage`: a drink (always a subset of consumable in the catalog)
/// - derived `is_food()`: consumable and not a beverage
///
/// These three drive the senior-citizen discount at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique serial number; the first 3 characters are the category
    /// prefix (e.g. "BRD" in "BRD001").
    pub serial: String,

    /// Display name shown in inventory views and on the receipt.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Whether the product is meant to be eaten or drunk.
    pub consumable: bool,

    /// Whether the product is a drink.
    pub beverage: bool,
}

impl Product {
    /// Creates a product and wraps it in a handle.
    pub fn new(
        serial: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        consumable: bool,
        beverage: bool,
    ) -> ProductHandle {
        Arc::new(Product {
            serial: serial.into(),
            name: name.into(),
            price,
            consumable,
            beverage,
        })
    }

    /// Extracts the 3-character category prefix from the serial number.
    ///
    /// Returns `""` if the serial is shorter than three characters, which
    /// no display admits.
    pub fn serial_prefix(&self) -> &str {
        self.serial.get(..3).unwrap_or("")
    }

    /// A product is food if it is consumable but not a beverage.
    #[inline]
    pub fn is_food(&self) -> bool {
        self.consumable && !self.beverage
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full read-only product catalog, loaded once at map construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductHandle>,
}

impl Catalog {
    /// Creates a catalog from a list of product handles.
    pub fn new(products: Vec<ProductHandle>) -> Self {
        Catalog { products }
    }

    /// All catalog entries, in declaration order.
    pub fn products(&self) -> &[ProductHandle] {
        &self.products
    }

    /// Catalog entries whose serial carries the given category prefix.
    ///
    /// The stocking pass uses this to pick the variants for a display.
    pub fn by_prefix(&self, prefix: &str) -> Vec<ProductHandle> {
        self.products
            .iter()
            .filter(|p| p.serial_prefix() == prefix)
            .cloned()
            .collect()
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
