//! # Draft Bill
//!
//! The in-progress bill: line-item builder and lifecycle.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Bill Lifecycle                             │
//! │                                                                 │
//! │  1. BUILD (in memory, mutable)                                  │
//! │     └── upsert_item() appends, or replaces in place on edit     │
//! │     └── remove_item() drops a line (no-op when absent)          │
//! │                                                                 │
//! │  2. FINALIZE                                                    │
//! │     └── finalize(rates) → immutable Bill with id, date and      │
//! │         rate snapshots; ValidationError leaves the draft intact │
//! │                                                                 │
//! │  3. PERSIST (aurum-db, single transaction)                      │
//! │     └── only after the write succeeds does the caller clear()   │
//! │         the draft; on failure the user retries with data intact │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Edits Use "Now" Rates
//! Editing an existing line item recomputes its amounts from the rate
//! configuration passed to `upsert_item` at edit time, NOT the rates in
//! effect when the line was first added. This is a deliberate policy:
//! the draft always reflects what the customer would pay right now.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::totals::compute_totals;
use crate::types::{Bill, BillItem, RateConfig, Weight};
use crate::validation::validate_customer_name;
use crate::MAX_BILL_ITEMS;

// =============================================================================
// Draft Bill
// =============================================================================

/// The single in-progress bill for a billing session.
///
/// ## Invariants
/// - Insertion order is display order; in-place edits keep position and id
/// - Totals are never cached here; [`compute_totals`] derives them on demand
/// - Maximum items: [`MAX_BILL_ITEMS`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBill {
    /// Customer name as typed so far; validated at finalize.
    pub customer_name: String,

    /// Line items in display order.
    items: Vec<BillItem>,

    /// When the draft was created/last cleared.
    pub created_at: DateTime<Utc>,
}

impl DraftBill {
    /// Creates a new empty draft.
    pub fn new() -> Self {
        DraftBill {
            customer_name: String::new(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Returns the line items in display order.
    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the draft has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a line item, or replaces one in place when editing.
    ///
    /// ## Behavior
    /// - Resolves the category and computes gold charge, seikuli charge
    ///   and line total from the **current** rate snapshot
    /// - `editing_item_id` matching an existing line: that line is
    ///   replaced in place (same position, same id), recomputed at the
    ///   current rates - not the rates used when it was first added
    /// - Otherwise a new line item is appended with a fresh UUID
    ///
    /// ## Errors
    /// - [`CoreError::CategoryNotFound`] for an unknown category id
    /// - [`ValidationError::MustBePositive`] for a non-positive weight
    /// - [`CoreError::BillTooLarge`] when appending past the item limit
    ///
    /// No mutation occurs on any error path.
    pub fn upsert_item(
        &mut self,
        rates: &RateConfig,
        category_id: &str,
        weight: Weight,
        editing_item_id: Option<&str>,
    ) -> CoreResult<&BillItem> {
        if weight.milligrams() <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "weight".to_string(),
            }
            .into());
        }

        let category = rates
            .category(category_id)
            .ok_or_else(|| CoreError::CategoryNotFound(category_id.to_string()))?;

        let gold_amount = rates.gold_rate().per_gram(weight);
        let seikuli_amount = category.seikuli_rate().per_gram(weight);
        let line_total = gold_amount + seikuli_amount;

        let build = |id: String| BillItem {
            id,
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            weight_mg: weight.milligrams(),
            seikuli_rate_paise: category.seikuli_rate_paise,
            gold_amount_paise: gold_amount.paise(),
            seikuli_amount_paise: seikuli_amount.paise(),
            line_total_paise: line_total.paise(),
        };

        // In-place replacement keeps the item's position and id.
        if let Some(edit_id) = editing_item_id {
            if let Some(pos) = self.items.iter().position(|i| i.id == edit_id) {
                self.items[pos] = build(edit_id.to_string());
                return Ok(&self.items[pos]);
            }
        }

        if self.items.len() >= MAX_BILL_ITEMS {
            return Err(CoreError::BillTooLarge {
                max: MAX_BILL_ITEMS,
            });
        }

        self.items.push(build(Uuid::new_v4().to_string()));
        Ok(self.items.last().expect("just pushed"))
    }

    /// Removes the line item with the given id.
    ///
    /// Absence of a matching id is a no-op, not an error; removal is a
    /// purely local editing convenience.
    pub fn remove_item(&mut self, item_id: &str) {
        self.items.retain(|i| i.id != item_id);
    }

    /// Validates the draft and produces an immutable [`Bill`].
    ///
    /// ## Preconditions
    /// - Customer name non-empty after trimming
    /// - At least one line item
    ///
    /// A [`ValidationError`] leaves the draft untouched so the user can
    /// correct the input and retry.
    ///
    /// ## What Gets Snapshotted
    /// The gold rate and GST percentage from `rates` are copied onto the
    /// bill along with `bill_date` = now, so the historical record stays
    /// accurate after the daily rates change.
    ///
    /// The draft is NOT cleared here. The caller clears it only after
    /// persistence reports success, so a failed write never loses data.
    pub fn finalize(&self, rates: &RateConfig) -> CoreResult<Bill> {
        validate_customer_name(&self.customer_name)?;

        if self.items.is_empty() {
            return Err(ValidationError::Required {
                field: "bill items".to_string(),
            }
            .into());
        }

        let totals = compute_totals(&self.items, rates.gst());

        Ok(Bill {
            id: Uuid::new_v4().to_string(),
            customer_name: self.customer_name.trim().to_string(),
            bill_date: Utc::now(),
            gold_rate_paise: rates.gold_rate_paise,
            gst_bps: rates.gst_bps,
            subtotal_paise: totals.subtotal_paise,
            gst_paise: totals.gst_paise,
            grand_total_paise: totals.grand_total_paise,
        })
    }

    /// Clears the draft back to empty and unnamed.
    ///
    /// Called after successful persistence (and receipt printing kicks
    /// off from the returned bill, outside this crate).
    pub fn clear(&mut self) {
        self.customer_name.clear();
        self.items.clear();
        self.created_at = Utc::now();
    }
}

impl Default for DraftBill {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Draft State
// =============================================================================

/// Shared handle to the session's draft bill.
///
/// ## Thread Safety
/// `Arc<Mutex<DraftBill>>` because the draft is owned by exactly one
/// billing session but may be touched from concurrent command handlers.
/// Operations are quick; a plain Mutex is enough.
#[derive(Debug)]
pub struct DraftState {
    draft: Arc<Mutex<DraftBill>>,
}

impl DraftState {
    /// Creates a new empty draft state.
    pub fn new() -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(DraftBill::new())),
        }
    }

    /// Executes a function with read access to the draft.
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DraftBill) -> R,
    {
        let draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&draft)
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DraftBill) -> R,
    {
        let mut draft = self.draft.lock().expect("Draft mutex poisoned");
        f(&mut draft)
    }
}

impl Default for DraftState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
