//! # aurum-core: Pure Business Logic for Aurum POS
//!
//! This crate is the **heart** of the jewellery billing system. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Aurum POS Data Flow                          │
//! │                                                                 │
//! │   Staff input (category, weight, customer)                      │
//! │        │                                                        │
//! │        ▼                                                        │
//! │   ★ aurum-core (THIS CRATE) ★                                   │
//! │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │
//! │   │  money   │ │  types   │ │  draft   │ │ receipt  │          │
//! │   │  Money   │ │ RateConfig│ │ DraftBill│ │ layout   │          │
//! │   │  Weight  │ │ Category │ │ BillItem │ │ render   │          │
//! │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │
//! │                                                                 │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │
//! │        │                                                        │
//! │        ▼                                                        │
//! │   aurum-db (SQLite persistence, history queries)                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Integer-paise money type (no floating point!)
//! - [`types`] - Domain types (Weight, GstRate, Category, RateConfig, Bill)
//! - [`draft`] - In-progress bill: line-item builder and lifecycle
//! - [`totals`] - Bill aggregation (subtotal, GST, grand total)
//! - [`receipt`] - Fixed-width receipt rendering for thermal printers
//! - [`validation`] - Input validation rules
//! - [`time`] - Store-local (IST) calendar-day arithmetic
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **Explicit Rates**: the rate configuration is passed in as a snapshot
//!    argument, never read from ambient state
//! 3. **Integer Money**: all monetary values are paise (i64)
//! 4. **Frozen Snapshots**: line items copy the category name and rates at
//!    creation time; later rate edits never rewrite history
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::{DraftBill, RateConfig, Category, Money, Weight, GstRate};
//!
//! let rates = RateConfig::new(
//!     Money::from_paise(600_000), // gold ₹6000.00 per gram
//!     GstRate::from_bps(300),     // GST 3%
//!     vec![Category::new("cat-1", "Ring", Money::from_paise(20_000))],
//! );
//!
//! let mut draft = DraftBill::new();
//! draft
//!     .upsert_item(&rates, "cat-1", Weight::from_milligrams(2_000), None)
//!     .unwrap();
//!
//! // 2g × ₹6000/g gold + 2g × ₹200/g seikuli
//! assert_eq!(draft.items()[0].line_total_paise, 1_240_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod draft;
pub mod error;
pub mod money;
pub mod receipt;
pub mod time;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use draft::{DraftBill, DraftState};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use receipt::ReceiptLayout;
pub use totals::{compute_totals, BillTotals};
pub use types::{Bill, BillItem, Category, GstRate, RateConfig, Weight};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items allowed on a single bill.
///
/// ## Business Reason
/// Prevents runaway drafts; a jewellery counter bill rarely has more than
/// a handful of items.
pub const MAX_BILL_ITEMS: usize = 100;

/// Maximum weight of a single line item, in milligrams (10 kg).
///
/// ## Business Reason
/// Catches data-entry slips (e.g. typing 2500 grams instead of 2.5).
pub const MAX_ITEM_WEIGHT_MG: i64 = 10_000_000;
