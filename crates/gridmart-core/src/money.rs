//! # Money Module
//!
//! Provides the `Money` type for handling prices and discounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The original simulation carried prices as doubles:                     │
//! │    85.00 * 0.20 = 17.000000000000002  ❌ WRONG!                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    8500 centavos * 2000 bps = exactly 1700 centavos                     │
//! │    Rounding, when it happens, is explicit and documented                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gridmart_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_cents(8500); // PHP 85.00
//!
//! // Discount in basis points (2000 = 20%)
//! let discount = price.discount_amount(2000);
//! assert_eq!(discount.cents(), 1700);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos for PHP).
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts subtract, and intermediate values may dip
///   below zero during reconciliation
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support so receipts serialize cleanly
///
/// Every price in the catalog, every running total at the checkout counter,
/// and every line on the receipt flows through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use gridmart_core::money::Money;
    ///
    /// let price = Money::from_cents(8500); // Represents PHP 85.00
    /// assert_eq!(price.cents(), 8500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// The seed catalog uses whole-peso prices, so this is the constructor
    /// the store data goes through.
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates a discount amount in basis points (1 bps = 0.01%).
    ///
    /// ## Why Basis Points?
    /// The senior-citizen rates are 20% on food and 10% on beverages.
    /// Stored as 2000 and 1000 bps, the per-item discount is pure integer
    /// math: `(amount_cents * bps + 5000) / 10000`, with the `+5000`
    /// providing round-half-up on the centavo.
    ///
    /// ## Example
    /// ```rust
    /// use gridmart_core::money::Money;
    ///
    /// let price = Money::from_cents(10_000); // PHP 100.00
    /// assert_eq!(price.discount_amount(2000).cents(), 2000); // 20% = PHP 20.00
    /// assert_eq!(price.discount_amount(1000).cents(), 1000); // 10% = PHP 10.00
    /// ```
    pub fn discount_amount(&self, bps: u32) -> Money {
        // i128 to prevent overflow on large amounts
        let discount = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(discount as i64)
    }

    /// Multiplies money by a quantity (line totals on summaries).
    ///
    /// ## Example
    /// ```rust
    /// use gridmart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(6000); // PHP 60.00
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 18_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is the format the receipt file uses ("PHP 85.00"). Frontend
/// localization is the presentation layer's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}PHP {}.{:02}", sign, self.pesos().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(8599);
        assert_eq!(money.cents(), 8599);
        assert_eq!(money.pesos(), 85);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_pesos() {
        assert_eq!(Money::from_pesos(85).cents(), 8500);
        assert_eq!(Money::from_pesos(0).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(8500)), "PHP 85.00");
        assert_eq!(format!("{}", Money::from_cents(2100)), "PHP 21.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-PHP 5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "PHP 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.cents(), 1500);
        running -= b;
        assert_eq!(running.cents(), 1000);
    }

    #[test]
    fn test_discount_senior_rates() {
        // The two rates the checkout engine actually applies
        let food = Money::from_cents(10_000); // PHP 100.00
        assert_eq!(food.discount_amount(2000).cents(), 2000);

        let beverage = Money::from_cents(5_000); // PHP 50.00
        assert_eq!(beverage.discount_amount(1000).cents(), 500);
    }

    #[test]
    fn test_discount_rounding() {
        // PHP 0.25 at 10% = 2.5 centavos, rounds up to 3
        assert_eq!(Money::from_cents(25).discount_amount(1000).cents(), 3);
        // PHP 0.24 at 10% = 2.4 centavos, rounds down to 2
        assert_eq!(Money::from_cents(24).discount_amount(1000).cents(), 2);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(2100);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 6300);
        assert_eq!(unit_price.multiply_quantity(0).cents(), 0);
    }
}
