//! # aurum-db: Database Layer for Aurum POS
//!
//! This crate provides database access for the Aurum POS billing system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum POS Data Flow                              │
//! │                                                                         │
//! │  Billing / History / Settings screens                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     aurum-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (bill.rs ...) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ SettingsRepo  │    │ 001_init.sql │  │   │
//! │  │   │ Connection    │◄───│ CategoryRepo  │    │ ...          │  │   │
//! │  │   │ Management    │    │ BillRepo      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐                                            │   │
//! │  │   │   RateFeed    │  watch channel: rate changes pushed to     │   │
//! │  │   │   (feed.rs)   │  open billing sessions                     │   │
//! │  │   └───────────────┘                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (aurum.db, WAL mode)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (settings, category, bill)
//! - [`feed`] - Rate-change broadcast channel
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aurum_db::{Database, DbConfig};
//! use aurum_core::time::store_tz;
//!
//! let db = Database::new(DbConfig::new("path/to/aurum.db")).await?;
//!
//! let rates = db.rate_config().await?;
//! let bills = db.bills().list_between(start, end, store_tz()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod feed;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use feed::RateFeed;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::bill::BillRepository;
pub use repository::category::CategoryRepository;
pub use repository::settings::{SettingsRepository, StoreSettings};
