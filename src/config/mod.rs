//! Configuration management.
//!
//! Resolves where the vault database lives and reads the presentational
//! preferences kept beside the items.
//!
//! # Layout
//!
//! - **Database**: `~/.context-vault/data/vault.db`
//! - **Test database**: `~/.context-vault/test/vault.db` (when `CV_TEST_DB` is set)

mod prefs;

pub use prefs::{Theme, load_theme, save_theme};

use std::path::{Path, PathBuf};

/// Get the global Context Vault directory location (`~/.context-vault/`).
#[must_use]
pub fn global_vault_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".context-vault"))
}

/// Check if test mode is enabled.
///
/// Test mode is enabled by setting `CV_TEST_DB=1` (or any non-empty value
/// other than `0`/`false`). This redirects the CLI to an isolated database.
#[must_use]
pub fn is_test_mode() -> bool {
    std::env::var("CV_TEST_DB").is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && !value.eq_ignore_ascii_case("false")
}

/// Get the test database path.
#[must_use]
pub fn test_db_path() -> Option<PathBuf> {
    global_vault_dir().map(|dir| dir.join("test").join("vault.db"))
}

/// Resolve the database path.
///
/// Priority:
/// 1. `explicit_path` (the `--db` flag or `CV_DB`, resolved by clap)
/// 2. `CV_TEST_DB` → isolated test database
/// 3. Global location: `~/.context-vault/data/vault.db`
#[must_use]
pub fn resolve_db_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if is_test_mode() {
        return test_db_path();
    }

    global_vault_dir().map(|dir| dir.join("data").join("vault.db"))
}
