//! # Repository Module
//!
//! Database repository implementations for Aurum POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Caller (UI shell, seed tool)                                          │
//! │       │                                                                 │
//! │       │  db.bills().list_between(start, end, store_tz())               │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  BillRepository                                                        │
//! │  ├── insert_bill(&self, bill, items)                                   │
//! │  ├── list_between(&self, start, end, tz)                               │
//! │  ├── get_by_id(&self, id)                                              │
//! │  └── get_items(&self, bill_id)                                         │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Repositories are cheap clones over the shared pool                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`settings::SettingsRepository`] - Store-wide gold and GST rates
//! - [`category::CategoryRepository`] - Category CRUD
//! - [`bill::BillRepository`] - Bill persistence and history queries

pub mod bill;
pub mod category;
pub mod settings;
