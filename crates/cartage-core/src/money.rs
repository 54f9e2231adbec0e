//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Delivery quantities are fractional tons (12.5 t), so plain integer    │
//! │  cents can't hold quantity × price either.                             │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    12.5 × €12.33 = €154.125 exactly                                    │
//! │    Sums reconcile exactly: Σ subtotal == client total == day total     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cartage_core::money::Money;
//!
//! // Create from major/minor units
//! let rate = Money::from_major_minor(10, 99); // €10.99
//!
//! // Arithmetic operations
//! let total = rate + Money::from_major_minor(5, 0); // €15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_f64(10.99); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value with exact base-10 arithmetic.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for corrections
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  MaterialRate.price ──► LineItem.price ──► LineItem.subtotal           │
/// │                                  │                                      │
/// │  ClientEntry.client_total ◄──────┴──► ShipmentDay.day_total            │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a raw decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from major and minor units (euros and cents).
    ///
    /// ## Example
    /// ```rust
    /// use cartage_core::money::Money;
    ///
    /// let rate = Money::from_major_minor(10, 99); // €10.99
    /// assert_eq!(rate.to_string(), "€10.99");
    ///
    /// let negative = Money::from_major_minor(-5, 50); // -€5.50
    /// assert_eq!(negative.to_string(), "-€5.50");
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -€5.50, not -€4.50
    pub fn from_major_minor(major: i64, minor: u32) -> Self {
        let cents = if major < 0 {
            major * 100 - minor as i64
        } else {
            major * 100 + minor as i64
        };
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use cartage_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies the per-unit price by a (possibly fractional) quantity.
    ///
    /// The product is exact: both operands are finite decimals.
    ///
    /// ## Example
    /// ```rust
    /// use cartage_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let per_ton = Money::from_major_minor(12, 0);
    /// let subtotal = per_ton.multiply_quantity(Decimal::new(125, 1)); // 12.5 t
    /// assert_eq!(subtotal, Money::from_major_minor(150, 0));
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Rate: €12.00 per ton
    /// Quantity: 12.5 tons
    ///      │
    ///      ▼
    /// multiply_quantity(12.5) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: €150.00
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, quantity: Decimal) -> Self {
        Money(self.0 * quantity)
    }

    /// Divides the amount evenly by a count, for averages.
    ///
    /// Returns zero when `count` is zero — reporting code must never hit a
    /// divide-by-zero fault on an empty period.
    pub fn divide_count(&self, count: usize) -> Self {
        if count == 0 {
            return Money::zero();
        }
        Money(self.0 / Decimal::from(count as u64))
    }

    /// Renders the bare amount with trailing zeros stripped (`1320`, `12.5`).
    ///
    /// Used by the CSV exporter, where the compatibility contract is the
    /// plain number without a currency symbol.
    pub fn to_plain_string(&self) -> String {
        self.0.normalize().to_string()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and reports. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}€{}", sign, self.0.abs().round_dp(2))
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summing an iterator of Money values (entry and day totals).
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
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.amount(), dec!(10.99));

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.amount(), dec!(-5.50));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_major_minor(10, 99)), "€10.99");
        assert_eq!(format!("{}", Money::from_major_minor(5, 0)), "€5.00");
        assert_eq!(format!("{}", Money::from_major_minor(-5, 50)), "-€5.50");
        assert_eq!(format!("{}", Money::zero()), "€0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major_minor(10, 0);
        let b = Money::from_major_minor(5, 0);

        assert_eq!(a + b, Money::from_major_minor(15, 0));
        assert_eq!(a - b, Money::from_major_minor(5, 0));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc, Money::from_major_minor(15, 0));
    }

    #[test]
    fn test_sum_iterator() {
        let parts = vec![
            Money::from_major_minor(600, 0),
            Money::from_major_minor(450, 0),
        ];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total, Money::from_major_minor(1050, 0));
    }

    #[test]
    fn test_fractional_quantity_is_exact() {
        // 12.5 t × €12.33 must be €154.125 exactly, not an epsilon away
        let rate = Money::new(dec!(12.33));
        let subtotal = rate.multiply_quantity(dec!(12.5));
        assert_eq!(subtotal.amount(), dec!(154.125));
    }

    #[test]
    fn test_divide_count_guards_zero() {
        let revenue = Money::from_major_minor(300, 0);
        assert_eq!(revenue.divide_count(3), Money::from_major_minor(100, 0));
        assert_eq!(revenue.divide_count(0), Money::zero());
    }

    #[test]
    fn test_plain_string_strips_trailing_zeros() {
        assert_eq!(Money::from_major_minor(1320, 0).to_plain_string(), "1320");
        assert_eq!(Money::new(dec!(12.50)).to_plain_string(), "12.5");
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_major_minor(1, 0);
        assert!(positive.is_positive());

        let negative = Money::from_major_minor(-1, 0);
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), positive);
    }

    #[test]
    fn test_serde_round_trip() {
        let money = Money::from_major_minor(10, 99);
        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(money, back);
    }
}
