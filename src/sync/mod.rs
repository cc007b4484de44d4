//! JSON export/import files.
//!
//! The export document is a pretty-printed JSON array of every item; the
//! import document has the same shape and is appended to the store by
//! [`crate::store::ItemStore::import_merge`]. This module only deals with
//! the files themselves.

mod file;

pub use file::{atomic_write, export_file_name, read_import_file};
