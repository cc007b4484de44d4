//! Data models for Context Vault.
//!
//! - Item, ItemKind, ItemDraft
//! - Tool catalog

pub mod item;
pub mod tool;

pub use item::{Item, ItemDraft, ItemId, ItemKind};
pub use tool::{DEFAULT_TOOL, TOOLS, Tool, find_tool, tool_label};
