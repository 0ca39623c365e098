//! # Money Module
//!
//! Provides the `Money` type for menu prices and item totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    1.75 + 0.15 = 1.9000000000000001  ❌ not what the menu says         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    175 + 15 = 190 cents               ✅ exact, every time             │
//! │                                                                         │
//! │  Only the taxed order total leaves integer land, because the 7.25%     │
//! │  multiplier produces fractions of a cent that must NOT be rounded      │
//! │  until the receipt is printed.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stand_core::money::Money;
//! use stand_core::types::TaxRate;
//!
//! let drink = Money::from_cents(190); // $1.90
//! let fries = Money::from_cents(240); // $2.40
//! let subtotal = drink + fries;
//!
//! let total = subtotal.with_tax(TaxRate::from_bps(725));
//! assert!((total - 4.61175).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// Size::price / FoodType::price / Topping::price
///        │
///        ▼
/// Drink::total / Food::total ──► OrderItem::cost ──► Order::subtotal
///                                                         │
///                                                         ▼
///                                          Money::with_tax ──► Order::total (f64)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stand_core::money::Money;
    ///
    /// let price = Money::from_cents(205); // Represents $2.05
    /// assert_eq!(price.cents(), 205);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
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

    /// Returns the value in dollars as a float.
    ///
    /// Only for arithmetic that must leave integer cents (tax). Display
    /// goes through the `Display` impl instead.
    #[inline]
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Applies a tax rate and returns the taxed amount in dollars.
    ///
    /// ## No Rounding
    /// The result keeps full floating-point precision. Rounding to two
    /// decimals happens only when the receipt formats the number.
    ///
    /// ## Example
    /// ```rust
    /// use stand_core::money::Money;
    /// use stand_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(1000); // $10.00
    /// let total = subtotal.with_tax(TaxRate::from_bps(725));
    /// assert!((total - 10.725).abs() < 1e-9); // not $10.73
    /// ```
    pub fn with_tax(&self, rate: TaxRate) -> f64 {
        self.as_dollars() * rate.multiplier()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, the format printed on receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

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

/// Multiplication by a count (e.g. flavor shots).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
        let money = Money::from_cents(215);
        assert_eq!(money.cents(), 215);
        assert_eq!(money.dollars(), 2);
        assert_eq!(money.cents_part(), 15);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(190)), "$1.90");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(175);
        let b = Money::from_cents(15);

        assert_eq!((a + b).cents(), 190);
        assert_eq!((b * 3).cents(), 45);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running, Money::from_cents(190));
    }

    #[test]
    fn test_sum() {
        let total: Money = [150, 30, 60].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 240);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_with_tax_is_not_rounded() {
        let subtotal = Money::from_cents(430);
        let total = subtotal.with_tax(TaxRate::from_bps(725));
        assert!((total - 4.61175).abs() < 1e-9);
        assert_eq!(format!("{:.2}", total), "4.61");
    }

    #[test]
    fn test_with_zero_tax() {
        let subtotal = Money::from_cents(999);
        assert!((subtotal.with_tax(TaxRate::zero()) - 9.99).abs() < 1e-9);
    }
}
