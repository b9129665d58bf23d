//! # Bill Aggregator
//!
//! Folds line items into subtotal, GST and grand total.
//!
//! ## Guarantees
//! - Pure function, no side effects
//! - Idempotent: recomputing from the same items yields the same totals
//! - Order-independent: integer summation is commutative, so permuting
//!   the line items never changes the result
//!
//! Totals are never cached on the draft or the items; every caller
//! derives them from the line items on demand.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{BillItem, GstRate};

/// Derived totals for a set of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTotals {
    /// Σ line_total over all items.
    pub subtotal_paise: i64,
    /// subtotal × GST rate, rounded half up to the paisa.
    pub gst_paise: i64,
    /// subtotal + GST.
    pub grand_total_paise: i64,
}

impl BillTotals {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_paise(self.subtotal_paise)
    }

    /// Returns the GST amount as Money.
    #[inline]
    pub fn gst(&self) -> Money {
        Money::from_paise(self.gst_paise)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn grand_total(&self) -> Money {
        Money::from_paise(self.grand_total_paise)
    }
}

/// Computes subtotal, GST and grand total for the given line items.
///
/// ## Example
/// ```rust
/// use aurum_core::{compute_totals, GstRate};
///
/// let totals = compute_totals(&[], GstRate::from_bps(300));
/// assert_eq!(totals.grand_total_paise, 0);
/// ```
pub fn compute_totals(items: &[BillItem], gst_rate: GstRate) -> BillTotals {
    let subtotal: Money = items
        .iter()
        .map(|i| i.line_total())
        .fold(Money::zero(), |acc, t| acc + t);

    let gst = subtotal.gst(gst_rate);
    let grand_total = subtotal + gst;

    BillTotals {
        subtotal_paise: subtotal.paise(),
        gst_paise: gst.paise(),
        grand_total_paise: grand_total.paise(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
