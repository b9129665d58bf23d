//! # Domain Types
//!
//! Core domain types used throughout Aurum POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌────────────────┐   ┌────────────────┐   ┌────────────────┐
//! │   Category     │   │   RateConfig   │   │     Bill       │
//! │  ────────────  │   │  ────────────  │   │  ────────────  │
//! │  id            │   │  gold_rate     │   │  id (UUID)     │
//! │  name          │   │  gst           │   │  customer_name │
//! │  seikuli_rate  │   │  categories    │   │  bill_date     │
//! └────────────────┘   └────────────────┘   │  rate snapshots│
//!                                           │  totals        │
//! ┌────────────────┐   ┌────────────────┐   └────────────────┘
//! │    Weight      │   │    GstRate     │
//! │  ────────────  │   │  ────────────  │   BillItem freezes the
//! │  mg (i64)      │   │  bps (u32)     │   category name and both
//! │  2500 = 2.5 g  │   │  300 = 3%      │   rates at add time.
//! └────────────────┘   └────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `BillItem` copies the category name, the seikuli rate and the gold
//! rate the moment it is created. Editing a category or the daily gold
//! rate afterwards never changes historical line items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_WEIGHT_MG;

// =============================================================================
// GST Rate
// =============================================================================

/// GST rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 300 bps = 3% (the usual GST on gold jewellery)
///
/// Storing the percentage as an integer keeps the tax computation in
/// exact integer arithmetic; see [`Money::gst`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstRate(u32);

impl GstRate {
    /// Creates a GST rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        GstRate(bps)
    }

    /// Creates a GST rate from a percentage (for settings input).
    pub fn from_percentage(pct: f64) -> Self {
        GstRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero GST rate.
    #[inline]
    pub const fn zero() -> Self {
        GstRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for GstRate {
    fn default() -> Self {
        GstRate::zero()
    }
}

// =============================================================================
// Weight
// =============================================================================

/// An item weight in milligrams.
///
/// Staff enter weights in grams with up to three decimal places
/// ("2.5", "0.750"); internally everything is integer milligrams so
/// rate × weight products stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from milligrams.
    #[inline]
    pub const fn from_milligrams(mg: i64) -> Self {
        Weight(mg)
    }

    /// Returns the weight in milligrams.
    #[inline]
    pub const fn milligrams(&self) -> i64 {
        self.0
    }

    /// Parses a decimal gram string ("2.5", "0.750", ".25") into a weight.
    ///
    /// ## Rules
    /// - Must be a plain decimal number, at most 3 fractional digits
    /// - Must be strictly positive
    /// - Must not exceed [`MAX_ITEM_WEIGHT_MG`] (10 kg)
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::Weight;
    ///
    /// assert_eq!(Weight::parse_grams("2.5").unwrap().milligrams(), 2_500);
    /// assert_eq!(Weight::parse_grams("10").unwrap().milligrams(), 10_000);
    /// assert!(Weight::parse_grams("0").is_err());
    /// assert!(Weight::parse_grams("-1").is_err());
    /// assert!(Weight::parse_grams("abc").is_err());
    /// ```
    pub fn parse_grams(input: &str) -> Result<Weight, ValidationError> {
        let s = input.trim();

        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "weight".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "weight".to_string(),
            reason: reason.to_string(),
        };

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("must be a decimal number of grams"));
        }
        if frac.len() > 3 {
            return Err(invalid("at most 3 decimal places of grams"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a decimal number of grams"));
        }

        let whole_g: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| invalid("whole grams out of range"))?
        };

        // Pad the fraction to milligrams: "5" → 500, "75" → 750
        let mut frac_mg: i64 = 0;
        if !frac.is_empty() {
            let padded = format!("{:0<3}", frac);
            frac_mg = padded
                .parse()
                .map_err(|_| invalid("fractional grams out of range"))?;
        }

        let mg = whole_g
            .checked_mul(1000)
            .and_then(|w| w.checked_add(frac_mg))
            .ok_or_else(|| invalid("weight out of range"))?;

        if mg <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "weight".to_string(),
            });
        }
        if mg > MAX_ITEM_WEIGHT_MG {
            return Err(ValidationError::OutOfRange {
                field: "weight".to_string(),
                min: 1,
                max: MAX_ITEM_WEIGHT_MG,
            });
        }

        Ok(Weight(mg))
    }

    /// Formats the weight as trimmed decimal grams ("2.5", "10").
    pub fn grams_display(&self) -> String {
        let whole = self.0 / 1000;
        let frac = (self.0 % 1000).abs();
        if frac == 0 {
            whole.to_string()
        } else {
            let frac = format!("{:03}", frac);
            format!("{}.{}", whole, frac.trim_end_matches('0'))
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A jewellery category with its per-gram seikuli (labor) rate.
///
/// Categories are managed on the settings screen; the seikuli rate is
/// independent of the daily gold rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display label; treated as unique in the UI.
    pub name: String,

    /// Seikuli (labor) rate in paise per gram.
    pub seikuli_rate_paise: i64,
}

impl Category {
    /// Creates a new category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, seikuli_rate: Money) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            seikuli_rate_paise: seikuli_rate.paise(),
        }
    }

    /// Returns the seikuli rate as a Money type.
    #[inline]
    pub fn seikuli_rate(&self) -> Money {
        Money::from_paise(self.seikuli_rate_paise)
    }
}

// =============================================================================
// Rate Configuration
// =============================================================================

/// An immutable snapshot of the store-wide rates.
///
/// ## Explicit Snapshots, Never Ambient State
/// Every computation takes a `&RateConfig` argument. When the settings
/// screen (or another session, via change notification) updates a rate,
/// the session swaps in a fresh snapshot; line items already on the
/// draft are NOT recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateConfig {
    /// Daily gold rate in paise per gram.
    pub gold_rate_paise: i64,

    /// GST percentage in basis points.
    pub gst_bps: u32,

    /// Categories with their seikuli rates, ordered by name.
    pub categories: Vec<Category>,
}

impl RateConfig {
    /// Creates a new rate configuration snapshot.
    pub fn new(gold_rate: Money, gst: GstRate, categories: Vec<Category>) -> Self {
        RateConfig {
            gold_rate_paise: gold_rate.paise(),
            gst_bps: gst.bps(),
            categories,
        }
    }

    /// Returns the gold rate as a Money type.
    #[inline]
    pub fn gold_rate(&self) -> Money {
        Money::from_paise(self.gold_rate_paise)
    }

    /// Returns the GST rate.
    #[inline]
    pub fn gst(&self) -> GstRate {
        GstRate::from_bps(self.gst_bps)
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

// =============================================================================
// Bill Item
// =============================================================================

/// A line item on a bill.
///
/// Uses the snapshot pattern: the category name and both rates are
/// frozen at the time the item is added, so later settings edits never
/// rewrite history. Invariant: `line_total = gold_amount +
/// seikuli_amount` exactly; the total is computed once at construction
/// and never independently mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    /// Unique identifier (UUID v4); stable across in-place edits.
    pub id: String,
    /// Category reference.
    pub category_id: String,
    /// Category name at time of adding (frozen).
    pub category_name: String,
    /// Weight in milligrams.
    pub weight_mg: i64,
    /// Seikuli rate in paise per gram at time of adding (frozen).
    pub seikuli_rate_paise: i64,
    /// Gold charge: weight × gold rate at add time.
    pub gold_amount_paise: i64,
    /// Seikuli charge: weight × category seikuli rate at add time.
    pub seikuli_amount_paise: i64,
    /// gold_amount + seikuli_amount.
    pub line_total_paise: i64,
}

impl BillItem {
    /// Returns the weight.
    #[inline]
    pub fn weight(&self) -> Weight {
        Weight::from_milligrams(self.weight_mg)
    }

    /// Returns the gold charge as Money.
    #[inline]
    pub fn gold_amount(&self) -> Money {
        Money::from_paise(self.gold_amount_paise)
    }

    /// Returns the seikuli charge as Money.
    #[inline]
    pub fn seikuli_amount(&self) -> Money {
        Money::from_paise(self.seikuli_amount_paise)
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_paise(self.line_total_paise)
    }
}

// =============================================================================
// Bill
// =============================================================================

/// A finalized, immutable bill header.
///
/// Created by [`crate::DraftBill::finalize`]; carries the rate snapshots
/// in effect at submission time so historical bills stay accurate even
/// after the daily rates change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub customer_name: String,
    pub bill_date: DateTime<Utc>,
    /// Gold rate snapshot at submission (paise per gram).
    pub gold_rate_paise: i64,
    /// GST snapshot at submission (basis points).
    pub gst_bps: u32,
    pub subtotal_paise: i64,
    pub gst_paise: i64,
    pub grand_total_paise: i64,
}

impl Bill {
    /// Returns the gold rate snapshot as Money.
    #[inline]
    pub fn gold_rate(&self) -> Money {
        Money::from_paise(self.gold_rate_paise)
    }

    /// Returns the GST snapshot.
    #[inline]
    pub fn gst_rate(&self) -> GstRate {
        GstRate::from_bps(self.gst_bps)
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise)
    }

    /// Returns the GST amount as Money.
    #[inline]
    pub fn gst_amount(&self) -> Money {
        Money::from_paise(self.gst_paise)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_paise(self.grand_total_paise)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gst_rate_from_bps() {
        let rate = GstRate::from_bps(300);
        assert_eq!(rate.bps(), 300);
        assert!((rate.percentage() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_gst_rate_from_percentage() {
        assert_eq!(GstRate::from_percentage(3.0).bps(), 300);
        assert_eq!(GstRate::from_percentage(0.25).bps(), 25);
    }

    #[test]
    fn test_weight_parse_grams() {
        assert_eq!(Weight::parse_grams("2.5").unwrap().milligrams(), 2_500);
        assert_eq!(Weight::parse_grams("0.750").unwrap().milligrams(), 750);
        assert_eq!(Weight::parse_grams(".25").unwrap().milligrams(), 250);
        assert_eq!(Weight::parse_grams(" 10 ").unwrap().milligrams(), 10_000);
    }

    #[test]
    fn test_weight_parse_rejects_bad_input() {
        assert!(Weight::parse_grams("").is_err());
        assert!(Weight::parse_grams("0").is_err());
        assert!(Weight::parse_grams("0.000").is_err());
        assert!(Weight::parse_grams("-1").is_err());
        assert!(Weight::parse_grams("2.5g").is_err());
        assert!(Weight::parse_grams("1.2345").is_err());
        assert!(Weight::parse_grams(".").is_err());
        // Over 10 kg
        assert!(Weight::parse_grams("10000.001").is_err());
    }

    #[test]
    fn test_weight_grams_display() {
        assert_eq!(Weight::from_milligrams(2_500).grams_display(), "2.5");
        assert_eq!(Weight::from_milligrams(750).grams_display(), "0.75");
        assert_eq!(Weight::from_milligrams(10_000).grams_display(), "10");
        assert_eq!(Weight::from_milligrams(1).grams_display(), "0.001");
    }

    #[test]
    fn test_rate_config_category_lookup() {
        let rates = RateConfig::new(
            Money::from_paise(600_000),
            GstRate::from_bps(300),
            vec![
                Category::new("cat-1", "Ring", Money::from_paise(20_000)),
                Category::new("cat-2", "Chain", Money::from_paise(30_000)),
            ],
        );

        assert_eq!(rates.category("cat-2").unwrap().name, "Chain");
        assert!(rates.category("cat-9").is_none());
    }
}
