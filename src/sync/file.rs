//! File operations for export and import.
//!
//! - Atomic writes: write to temp file, sync to disk, then rename
//! - Export file naming by date
//! - Reading import documents

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Default export file name for a given UTC day: `ai-ide-data-YYYY-MM-DD.json`.
///
/// Matches the name the browser vault gives its downloads.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("ai-ide-data-{}.json", date.format("%Y-%m-%d"))
}

/// Write content to a file atomically.
///
/// This function:
/// 1. Writes content to a temporary file (same path with `.tmp` extension)
/// 2. Calls `fsync` to ensure data is on disk
/// 3. Atomically renames the temp file to the target path
///
/// If any step fails, the existing file (if any) remains untouched.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("json.tmp");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        // Sync to disk before rename
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read an import document as text.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the path does not exist, an I/O error
/// if it can't be read, or [`Error::ImportFormat`] if it isn't UTF-8.
pub fn read_import_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| Error::ImportFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(export_file_name(date), "ai-ide-data-2025-01-09.json");
    }

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("export.json");

        atomic_write(&path, "[]\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.json");

        fs::write(&path, "old").unwrap();
        atomic_write(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_read_import_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(read_import_file(&path).unwrap(), "[]");
    }

    #[test]
    fn test_read_import_file_not_found() {
        let result = read_import_file(Path::new("/nonexistent/items.json"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_read_import_file_rejects_binary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(read_import_file(&path), Err(Error::ImportFormat(_))));
    }
}
