//! Context Vault: a local store of prompts, memories and workspace
//! instructions for AI coding tools.
//!
//! This crate provides the core functionality for the `cv` CLI tool.
//!
//! # Architecture
//!
//! - [`store`] - The item repository: CRUD, edit lock, search, import/export
//! - [`model`] - Data types (Item, ItemKind, the tool catalog)
//! - [`storage`] - Named-slot persistence (SQLite and in-memory)
//! - [`sync`] - Export/import files
//! - [`config`] - Database path resolution and the theme preference
//! - [`cli`] - Command-line interface using clap
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;
pub mod sync;
pub mod validate;

pub use error::{Error, Result};
pub use store::{ItemStore, SearchQuery};

/// Global silent mode flag for `--silent` output.
///
/// When set, mutating commands print only the item ID.
pub static SILENT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Global dry-run flag for `--dry-run`.
pub static DRY_RUN: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Global CSV output flag (set when `--format csv`).
pub static CSV_OUTPUT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

#[inline]
pub fn is_silent() -> bool {
    SILENT.load(std::sync::atomic::Ordering::Relaxed)
}

#[inline]
pub fn is_dry_run() -> bool {
    DRY_RUN.load(std::sync::atomic::Ordering::Relaxed)
}

#[inline]
pub fn is_csv() -> bool {
    CSV_OUTPUT.load(std::sync::atomic::Ordering::Relaxed)
}

/// Quote a CSV field if it contains a comma, quote or newline.
#[must_use]
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
