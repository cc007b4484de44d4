//! Named-slot persistence.
//!
//! [`SlotStore`] is the save/load seam between [`crate::store::ItemStore`]
//! and whatever keeps data across runs. The store only ever reads a slot
//! once at startup and overwrites it after each mutation.

use crate::error::Result;
use crate::storage::schema::apply_schema;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Slot holding the JSON-encoded item list.
pub const ITEMS_SLOT: &str = "ai-ide-items";

/// Slot holding the `light`/`dark` theme preference.
pub const THEME_SLOT: &str = "theme";

/// Key/value persistence addressed by slot name.
pub trait SlotStore {
    /// Read a slot. `Ok(None)` when the slot was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self, slot: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn save(&mut self, slot: &str, value: &str) -> Result<()>;
}

/// SQLite-backed slot store.
#[derive(Debug)]
pub struct SqliteSlotStore {
    conn: Connection,
}

impl SqliteSlotStore {
    /// Open (or create) the database at `path`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or connection cannot be created or
    /// the schema fails to apply.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, None)
    }

    /// Open a database with an optional busy timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open_with_timeout(path: &Path, timeout_ms: Option<u64>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Default 5 second timeout
        conn.busy_timeout(Duration::from_millis(timeout_ms.unwrap_or(5000)))?;

        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl SlotStore for SqliteSlotStore {
    fn load(&self, slot: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1", [slot], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, slot: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![slot, value, chrono::Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }
}

/// In-process slot store, mainly for tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot without going through [`SlotStore::save`].
    #[must_use]
    pub fn with_slot(mut self, slot: &str, value: &str) -> Self {
        self.slots.insert(slot.to_string(), value.to_string());
        self
    }
}

impl SlotStore for MemorySlotStore {
    fn load(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.get(slot).cloned())
    }

    fn save(&mut self, slot: &str, value: &str) -> Result<()> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_memory() {
        let storage = SqliteSlotStore::open_memory();
        assert!(storage.is_ok());
    }

    #[test]
    fn test_missing_slot_is_none() {
        let storage = SqliteSlotStore::open_memory().unwrap();
        assert_eq!(storage.load(ITEMS_SLOT).unwrap(), None);
    }

    #[test]
    fn test_save_overwrites() {
        let mut storage = SqliteSlotStore::open_memory().unwrap();
        storage.save(ITEMS_SLOT, "[]").unwrap();
        storage.save(ITEMS_SLOT, "[1]").unwrap();
        assert_eq!(storage.load(ITEMS_SLOT).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut storage = SqliteSlotStore::open_memory().unwrap();
        storage.save(ITEMS_SLOT, "[]").unwrap();
        storage.save(THEME_SLOT, "dark").unwrap();
        assert_eq!(storage.load(ITEMS_SLOT).unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.load(THEME_SLOT).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_open_creates_parent_dirs_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("vault.db");

        {
            let mut storage = SqliteSlotStore::open(&path).unwrap();
            storage.save(THEME_SLOT, "dark").unwrap();
        }

        assert!(path.exists());
        let storage = SqliteSlotStore::open(&path).unwrap();
        assert_eq!(storage.load(THEME_SLOT).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_slot_store() {
        let mut storage = MemorySlotStore::new().with_slot(THEME_SLOT, "light");
        assert_eq!(storage.load(THEME_SLOT).unwrap().as_deref(), Some("light"));
        storage.save(THEME_SLOT, "dark").unwrap();
        assert_eq!(storage.load(THEME_SLOT).unwrap().as_deref(), Some("dark"));
    }
}
