//! Command implementations.

pub mod catalog;
pub mod completions;
pub mod item;
pub mod theme;
pub mod transfer;
pub mod version;

use crate::config::resolve_db_path;
use crate::error::{Error, Result};
use crate::model::{ItemId, ItemKind};
use crate::storage::SqliteSlotStore;
use crate::store::ItemStore;
use crate::validate::{find_similar_ids, normalize_kind, normalize_tool};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Open the slot database the CLI works against.
pub(crate) fn open_slots(db_path: Option<&PathBuf>) -> Result<SqliteSlotStore> {
    let db_path = resolve_db_path(db_path.map(PathBuf::as_path))
        .ok_or_else(|| Error::Config("could not determine home directory".to_string()))?;
    SqliteSlotStore::open(&db_path)
}

/// Open the item store, loading the saved list.
pub(crate) fn open_store(db_path: Option<&PathBuf>) -> Result<ItemStore<SqliteSlotStore>> {
    ItemStore::open(open_slots(db_path)?)
}

pub(crate) fn parse_kind(input: &str) -> Result<ItemKind> {
    normalize_kind(input).map_err(|(input, suggestion)| Error::InvalidType { input, suggestion })
}

pub(crate) fn parse_tool(input: &str) -> Result<String> {
    normalize_tool(input).map_err(|(input, suggestion)| Error::InvalidTool { input, suggestion })
}

/// Not-found error, with close ids as suggestions when there are any.
pub(crate) fn not_found(store: &ItemStore<SqliteSlotStore>, id: &ItemId) -> Error {
    let similar = find_similar_ids(id.as_str(), store.items().iter().map(|i| i.id.as_str()), 3);
    if similar.is_empty() {
        Error::ItemNotFound { id: id.to_string() }
    } else {
        Error::ItemNotFoundSimilar {
            id: id.to_string(),
            similar,
        }
    }
}

/// Content from `--content`, or from `--file` (`-` meaning stdin).
pub(crate) fn read_content(content: Option<&str>, file: Option<&Path>) -> Result<Option<String>> {
    if let Some(content) = content {
        return Ok(Some(content.to_string()));
    }
    let Some(path) = file else {
        return Ok(None);
    };

    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(Some(buf));
    }

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(Some(std::fs::read_to_string(path)?))
}
