//! Export and import command implementations.

use crate::cli::commands::open_store;
use crate::error::Result;
use crate::store::parse_import;
use crate::sync::{atomic_write, export_file_name, read_import_file};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Execute `export`. Writes every item, regardless of any filter.
pub fn execute_export(output: Option<&Path>, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let document = store.export_all()?;

    if output == Some(Path::new("-")) {
        println!("{document}");
        return Ok(());
    }

    let path = output.map_or_else(
        || PathBuf::from(export_file_name(Utc::now().date_naive())),
        Path::to_path_buf,
    );

    if crate::is_dry_run() {
        println!("Would export {} items to {}", store.len(), path.display());
        return Ok(());
    }

    atomic_write(&path, &document)?;

    if crate::is_silent() {
        println!("{}", path.display());
    } else if json {
        let output = serde_json::json!({
            "success": true,
            "count": store.len(),
            "path": path.display().to_string(),
        });
        println!("{output}");
    } else {
        println!("Exported {} items to {}", store.len(), path.display());
    }
    Ok(())
}

/// Execute `import`: append the file's items to the end of the list.
pub fn execute_import(path: &Path, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let document = read_import_file(path)?;

    let count = if crate::is_dry_run() {
        parse_import(&document)?.len()
    } else {
        let mut store = open_store(db_path)?;
        store.import_merge(&document)?
    };

    if crate::is_silent() {
        println!("{count}");
    } else if json {
        let output = serde_json::json!({
            "success": true,
            "imported": count,
            "dry_run": crate::is_dry_run(),
        });
        println!("{output}");
    } else if crate::is_dry_run() {
        println!("Would import {count} items from {}", path.display());
    } else {
        println!("Imported {count} items from {}", path.display());
    }
    Ok(())
}
