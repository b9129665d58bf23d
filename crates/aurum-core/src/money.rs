//! # Money Module
//!
//! Provides the `Money` type for handling rupee values safely.
//!
//! ## Why Integer Money?
//! ```text
//! In floating point:
//!   0.1 + 0.2 = 0.30000000000000004   WRONG for currency
//!
//! OUR SOLUTION: integer paise
//!   ₹6000.00 per gram is 600000 paise; every product of rate and
//!   weight is exact i128 arithmetic with one explicit rounding step.
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::money::Money;
//! use aurum_core::types::{GstRate, Weight};
//!
//! // Create from paise (the only constructor from raw numbers)
//! let rate = Money::from_paise(600_000); // ₹6000.00 per gram
//!
//! // Gold charge for 2.5 grams
//! let gold = rate.per_gram(Weight::from_milligrams(2_500));
//! assert_eq!(gold.paise(), 1_500_000); // ₹15000.00
//!
//! // GST at 3%
//! let gst = gold.gst(GstRate::from_bps(300));
//! assert_eq!(gst.paise(), 45_000); // ₹450.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::{GstRate, Weight};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for adjustments and refunds
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Full serde support**: serialized as a plain integer
///
/// Every rupee amount in the system - gold rate, seikuli rate, line
/// totals, GST, grand total - flows through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Why Paise?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The database, calculations and receipts all use paise; only
    /// display formatting converts to rupees.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the rupee (major unit) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise (minor unit) portion, always 0-99.
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a per-gram rate by a weight, rounding half up to the paisa.
    ///
    /// `self` is interpreted as paise per gram; the weight is milligrams.
    ///
    /// ## Implementation
    /// Integer math with an i128 intermediate to prevent overflow:
    /// `(rate_paise × weight_mg + 500) / 1000`
    /// The +500 provides round-half-up (500/1000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::{Money, Weight};
    ///
    /// let rate = Money::from_paise(600_000); // ₹6000/gram
    /// let amount = rate.per_gram(Weight::from_milligrams(2_500)); // 2.5 g
    /// assert_eq!(amount.paise(), 1_500_000); // ₹15000.00
    /// ```
    pub fn per_gram(&self, weight: Weight) -> Money {
        let paise = (self.0 as i128 * weight.milligrams() as i128 + 500) / 1000;
        Money::from_paise(paise as i64)
    }

    /// Calculates GST on this amount, rounding half up to the paisa.
    ///
    /// ## Round-Half-Up
    /// ```text
    /// subtotal ₹1000.00 × 3%    = ₹30.00   (exact)
    /// subtotal ₹1000.15 × 3%    = ₹30.0045 → ₹30.00
    /// subtotal ₹1016.67 × 3%    = ₹30.5001 → ₹30.50
    /// ```
    ///
    /// ## Implementation
    /// `(amount_paise × bps + 5000) / 10000` with an i128 intermediate.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::{GstRate, Money};
    ///
    /// let subtotal = Money::from_paise(100_000); // ₹1000.00
    /// let gst = subtotal.gst(GstRate::from_bps(300)); // 3%
    /// assert_eq!(gst.paise(), 3_000); // ₹30.00
    /// ```
    pub fn gst(&self, rate: GstRate) -> Money {
        let gst_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(gst_paise as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Used on receipts; the paper layout is fixed-width so the format is
/// deliberately plain: `₹6000.00`, `-₹12.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
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
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(600_000)), "₹6000.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.paise(), 1500);
    }

    #[test]
    fn test_per_gram_whole_weight() {
        // 2 g × ₹6000/g = ₹12000
        let rate = Money::from_paise(600_000);
        let amount = rate.per_gram(Weight::from_milligrams(2_000));
        assert_eq!(amount.paise(), 1_200_000);
    }

    #[test]
    fn test_per_gram_fractional_weight() {
        // 2.5 g × ₹6000/g = ₹15000
        let rate = Money::from_paise(600_000);
        let amount = rate.per_gram(Weight::from_milligrams(2_500));
        assert_eq!(amount.paise(), 1_500_000);
    }

    #[test]
    fn test_per_gram_rounds_half_up() {
        // 1 mg × ₹5.00/g = 0.5 paise → rounds up to 1 paisa
        let rate = Money::from_paise(500);
        let amount = rate.per_gram(Weight::from_milligrams(1));
        assert_eq!(amount.paise(), 1);

        // 1 mg × ₹4.99/g = 0.499 paise → rounds down to 0
        let rate = Money::from_paise(499);
        let amount = rate.per_gram(Weight::from_milligrams(1));
        assert_eq!(amount.paise(), 0);
    }

    #[test]
    fn test_gst_exact() {
        // ₹1000.00 at 3% = ₹30.00
        let subtotal = Money::from_paise(100_000);
        let gst = subtotal.gst(GstRate::from_bps(300));
        assert_eq!(gst.paise(), 3_000);
    }

    #[test]
    fn test_gst_rounds_half_up() {
        // ₹1016.67 at 3% = ₹30.5001 → ₹30.50
        let gst = Money::from_paise(101_667).gst(GstRate::from_bps(300));
        assert_eq!(gst.paise(), 3_050);

        // 150 paise at 1% = 1.5 paise → 2 paise (half goes up, not to even)
        let gst = Money::from_paise(150).gst(GstRate::from_bps(100));
        assert_eq!(gst.paise(), 2);
    }

    #[test]
    fn test_gst_zero_rate() {
        let gst = Money::from_paise(123_456).gst(GstRate::zero());
        assert!(gst.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_paise(100).is_positive());
        assert!(Money::from_paise(-100).is_negative());
    }

    #[test]
    fn test_large_amounts_no_overflow() {
        // ₹100,000/g across 10 kg stays inside i64 thanks to the i128
        // intermediate in per_gram.
        let rate = Money::from_paise(10_000_000);
        let amount = rate.per_gram(Weight::from_milligrams(10_000_000));
        assert_eq!(amount.paise(), 100_000_000_000);
    }
}
