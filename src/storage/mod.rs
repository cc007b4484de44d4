//! Persistence layer for Context Vault.
//!
//! Data is kept in named slots, each holding one JSON document:
//! - SQLite file with WAL mode for the real CLI
//! - In-memory map for tests
//!
//! # Submodules
//!
//! - [`schema`] - Database schema definitions
//! - [`slots`] - `SlotStore` trait and its implementations

pub mod schema;
pub mod slots;

pub use slots::{ITEMS_SLOT, MemorySlotStore, SlotStore, SqliteSlotStore, THEME_SLOT};
