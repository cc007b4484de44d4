//! Theme preference, stored in its own slot next to the items.

use crate::error::Result;
use crate::storage::{SlotStore, THEME_SLOT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Colour scheme for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Read the stored theme. Missing or unreadable values fall back to the
/// default.
///
/// # Errors
///
/// Returns an error only if the storage backend fails.
pub fn load_theme<S: SlotStore>(storage: &S) -> Result<Theme> {
    let Some(raw) = storage.load(THEME_SLOT)? else {
        return Ok(Theme::default());
    };

    Ok(raw.parse().unwrap_or_else(|e| {
        warn!(value = %raw, error = %e, "Ignoring stored theme");
        Theme::default()
    }))
}

/// Store the theme preference.
///
/// # Errors
///
/// Returns an error if the storage backend fails.
pub fn save_theme<S: SlotStore>(storage: &mut S, theme: Theme) -> Result<()> {
    storage.save(THEME_SLOT, theme.as_str())
}
