//! Database schema for the slot store.
//!
//! The vault keeps one JSON document per named slot, mirroring a browser
//! key/value store: the item list lives in one slot, the theme preference
//! in another.

use rusqlite::{Connection, Result};

/// The complete SQL schema for the Context Vault database.
///
/// Timestamps are stored as INTEGER (Unix milliseconds).
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
";

/// Apply pragmas and create tables. Idempotent; safe on every open.
///
/// # Errors
///
/// Returns an error if a pragma or the DDL fails.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    conn.pragma_update(None, "temp_store", "MEMORY")?;

    conn.execute_batch(SCHEMA_SQL)?;

    Ok(())
}
