//! # Summary Module
//!
//! Quantity aggregation over a list of held products.
//!
//! Two views share this type and deliberately disagree on the grouping key
//! (observed behavior, kept as-is):
//! - the shopper's **inventory view** groups by product *name*
//! - the **receipt** groups by full *serial number*
//!
//! Two products sharing a name but different serials therefore merge in
//! the inventory view and stay separate on the receipt.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::ProductHandle;
use crate::money::Money;

// =============================================================================
// Product Summary
// =============================================================================

/// One aggregated line: a product, its unit price, and a running quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSummary {
    /// Serial number for receipt lines; `None` in the inventory view,
    /// which groups by name alone.
    pub serial: Option<String>,

    /// Product name.
    pub name: String,

    /// Unit price at aggregation time.
    pub unit_price: Money,

    /// Running quantity.
    pub quantity: i64,
}

impl ProductSummary {
    /// Line total: unit price times quantity.
    #[inline]
    pub fn total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Aggregates products by name, preserving first-seen order.
///
/// This is the shopper's inventory view ("what am I holding").
pub fn summarize_by_name(items: &[ProductHandle]) -> Vec<ProductSummary> {
    let mut lines: Vec<ProductSummary> = Vec::new();
    for item in items {
        match lines.iter_mut().find(|l| l.name == item.name) {
            Some(line) => line.quantity += 1,
            None => lines.push(ProductSummary {
                serial: None,
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
            }),
        }
    }
    lines
}

/// Aggregates products by full serial number, preserving first-seen order.
///
/// This is the receipt's line-item grouping.
pub fn summarize_by_serial(items: &[ProductHandle]) -> Vec<ProductSummary> {
    let mut lines: Vec<ProductSummary> = Vec::new();
    for item in items {
        match lines
            .iter_mut()
            .find(|l| l.serial.as_deref() == Some(item.serial.as_str()))
        {
            Some(line) => line.quantity += 1,
            None => lines.push(ProductSummary {
                serial: Some(item.serial.clone()),
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
            }),
        }
    }
    lines
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn items() -> Vec<ProductHandle> {
        let apple = Product::new("FRU003", "Apples", Money::from_pesos(60), true, false);
        // Same name, different serial - the interesting case
        let other_apple = Product::new("FRU999", "Apples", Money::from_pesos(60), true, false);
        vec![apple.clone(), other_apple, apple]
    }

    #[test]
    fn test_by_name_merges_shared_names() {
        let lines = summarize_by_name(&items());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Apples");
        assert_eq!(lines[0].quantity, 3);
        assert!(lines[0].serial.is_none());
    }

    #[test]
    fn test_by_serial_keeps_them_separate() {
        let lines = summarize_by_serial(&items());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].serial.as_deref(), Some("FRU003"));
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].serial.as_deref(), Some("FRU999"));
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn test_line_total() {
        let lines = summarize_by_serial(&items());
        assert_eq!(lines[0].total(), Money::from_pesos(120));
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize_by_name(&[]).is_empty());
        assert!(summarize_by_serial(&[]).is_empty());
    }
}
