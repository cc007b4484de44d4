//! `theme`: show or change the stored colour scheme.

use crate::cli::commands::open_slots;
use crate::config::{Theme, load_theme, save_theme};
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// Execute `theme`. With no argument, prints the current theme.
pub fn execute(theme: Option<Theme>, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut slots = open_slots(db_path)?;

    let (current, changed) = match theme {
        Some(theme) if !crate::is_dry_run() => {
            save_theme(&mut slots, theme)?;
            info!(theme = %theme, "Theme saved");
            (theme, true)
        }
        Some(theme) => (theme, false),
        None => (load_theme(&slots)?, false),
    };

    if json {
        let output = serde_json::json!({
            "theme": current.as_str(),
            "changed": changed,
            "dry_run": crate::is_dry_run(),
        });
        println!("{output}");
    } else if theme.is_some() && crate::is_dry_run() {
        println!("Would set theme: {current}");
    } else if changed {
        println!("Theme set: {current}");
    } else {
        println!("{current}");
    }
    Ok(())
}
