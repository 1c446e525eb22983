//! # Checkout Module
//!
//! Pure settlement math: products in, priced receipt out. No file I/O
//! happens here - rendering and persistence belong to the receipt crate.
//!
//! ## Senior Discount
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Age >= 60:                                                             │
//! │    food line       (consumable, not beverage)   -> 20% off line total   │
//! │    beverage line   (beverage)                   -> 10% off line total   │
//! │    alcohol line    (serial prefix "ALC")        -> never discounted     │
//! │    non-consumable  (household goods etc.)       -> full price           │
//! │  Age < 60: every line at full price.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Receipt lines aggregate by *serial*; the in-store inventory view
//! aggregates by *name*. Both keys are kept as observed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::ProductHandle;
use crate::money::Money;
use crate::summary::summarize_by_serial;
use crate::{ALCOHOL_PREFIX, BEVERAGE_DISCOUNT_BPS, FOOD_DISCOUNT_BPS, SENIOR_AGE};

// =============================================================================
// Receipt Types
// =============================================================================

/// One aggregated receipt line (same serial, same unit price).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub serial: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
    /// Senior discount applied to this line, zero when none applies.
    pub discount: Money,
}

/// A fully settled purchase. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Random v4 id, assigned at settlement.
    pub id: String,
    pub shopper_name: String,
    pub shopper_age: u8,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    /// Sum of line totals before any discount.
    pub subtotal: Money,
    /// Total senior discount across all lines.
    pub discount: Money,
    /// What the shopper actually pays.
    pub total: Money,
}

impl Receipt {
    pub fn is_senior(&self) -> bool {
        self.shopper_age >= SENIOR_AGE
    }
}

// =============================================================================
// Settlement
// =============================================================================

/// Discount rate for one product under the senior rule, in basis points.
fn senior_discount_bps(item: &ProductHandle) -> u32 {
    if item.serial_prefix() == ALCOHOL_PREFIX {
        return 0;
    }
    if item.is_food() {
        FOOD_DISCOUNT_BPS
    } else if item.consumable && item.beverage {
        BEVERAGE_DISCOUNT_BPS
    } else {
        0
    }
}

/// Prices a purchase: aggregates by serial, totals each line, and applies
/// the senior discount when the shopper qualifies.
///
/// The caller guarantees `products` is non-empty; an empty checkout is
/// refused before settlement (see [`crate::session`]).
pub fn settle(
    shopper_name: &str,
    shopper_age: u8,
    products: &[ProductHandle],
    issued_at: DateTime<Utc>,
) -> Receipt {
    let senior = shopper_age >= SENIOR_AGE;

    let mut lines = Vec::new();
    let mut subtotal = Money::zero();
    let mut discount_total = Money::zero();

    for summary in summarize_by_serial(products) {
        let line_total = summary.total();
        // The serial-keyed summary always carries the serial.
        let serial = summary.serial.clone().unwrap_or_default();

        let discount = if senior {
            let representative = products
                .iter()
                .find(|p| p.serial == serial)
                .map(senior_discount_bps)
                .unwrap_or(0);
            line_total.discount_amount(representative)
        } else {
            Money::zero()
        };

        subtotal += line_total;
        discount_total += discount;
        lines.push(ReceiptLine {
            serial,
            name: summary.name,
            unit_price: summary.unit_price,
            quantity: summary.quantity,
            line_total,
            discount,
        });
    }

    Receipt {
        id: Uuid::new_v4().to_string(),
        shopper_name: shopper_name.to_string(),
        shopper_age,
        issued_at,
        lines,
        subtotal,
        discount: discount_total,
        total: subtotal - discount_total,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn food(serial: &str, pesos: i64) -> ProductHandle {
        Product::new(serial, format!("Food {serial}"), Money::from_pesos(pesos), true, false)
    }

    fn beverage(serial: &str, pesos: i64) -> ProductHandle {
        Product::new(serial, format!("Drink {serial}"), Money::from_pesos(pesos), true, true)
    }

    fn household(serial: &str, pesos: i64) -> ProductHandle {
        Product::new(serial, format!("Item {serial}"), Money::from_pesos(pesos), false, false)
    }

    #[test]
    fn test_senior_mixed_basket() {
        // Scenario B: food 100 (20% -> 20), beverage 50 (10% -> 5),
        // alcohol 60 (no discount). 210 gross, 25 off, 185 due.
        let products = vec![
            food("BRD001", 100),
            beverage("JUC001", 50),
            beverage("ALC001", 60),
        ];
        let receipt = settle("Lola", 65, &products, Utc::now());

        assert_eq!(receipt.subtotal, Money::from_pesos(210));
        assert_eq!(receipt.discount, Money::from_pesos(25));
        assert_eq!(receipt.total, Money::from_pesos(185));
        assert!(receipt.is_senior());
    }

    #[test]
    fn test_non_senior_pays_full_price() {
        let products = vec![food("BRD001", 100), beverage("JUC001", 50)];
        let receipt = settle("Ana", 30, &products, Utc::now());

        assert_eq!(receipt.subtotal, Money::from_pesos(150));
        assert_eq!(receipt.discount, Money::zero());
        assert_eq!(receipt.total, Money::from_pesos(150));
    }

    #[test]
    fn test_non_consumables_never_discounted() {
        let products = vec![household("CLE001", 200)];
        let receipt = settle("Lolo", 70, &products, Utc::now());

        assert_eq!(receipt.discount, Money::zero());
        assert_eq!(receipt.total, Money::from_pesos(200));
    }

    #[test]
    fn test_lines_aggregate_by_serial() {
        let loaf = food("BRD001", 85);
        let products = vec![loaf.clone(), loaf.clone(), loaf];
        let receipt = settle("Ana", 30, &products, Utc::now());

        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.lines[0].quantity, 3);
        assert_eq!(receipt.lines[0].line_total, Money::from_pesos(255));
    }

    #[test]
    fn test_discount_applies_to_line_total() {
        // Two 85.00 loaves: 20% of 170.00 is 34.00
        let loaf = food("BRD001", 85);
        let receipt = settle("Lola", 60, &[loaf.clone(), loaf], Utc::now());

        assert_eq!(receipt.discount, Money::from_pesos(34));
        assert_eq!(receipt.total, Money::from_pesos(136));
    }

    #[test]
    fn test_receipt_serializes_camel_case() {
        let receipt = settle("Ana", 30, &[food("BRD001", 85)], Utc::now());
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["shopperName"], "Ana");
        assert_eq!(json["lines"][0]["lineTotal"], 8500);
        assert!(json["id"].as_str().is_some());
    }

    #[test]
    fn test_senior_boundary_is_sixty() {
        let products = vec![food("BRD001", 100)];
        assert_eq!(
            settle("A", 59, &products, Utc::now()).discount,
            Money::zero()
        );
        assert_eq!(
            settle("B", 60, &products, Utc::now()).discount,
            Money::from_pesos(20)
        );
    }
}
