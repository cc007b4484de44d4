//! Item model for Context Vault.
//!
//! An item is one stored snippet of context: a reusable prompt, a memory,
//! or a workspace instruction bound to a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque item identifier.
///
/// Items created locally get `item_` plus 12 hex chars. Imported items keep
/// whatever id they arrived with, so no format is assumed when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        let raw = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("item_{}", &raw[..12]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an item is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Reusable prompt.
    #[default]
    Prompt,
    /// Persistent context fact.
    Memory,
    /// Project-specific instruction file content.
    Workspace,
}

impl ItemKind {
    pub const ALL: [Self; 3] = [Self::Prompt, Self::Memory, Self::Workspace];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::Memory => "memory",
            Self::Workspace => "workspace",
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Prompt => "Prompt",
            Self::Memory => "Memory",
            Self::Workspace => "Workspace Instruction",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Prompt => "Reusable prompts for AI assistance",
            Self::Memory => "Persistent context like ChatGPT memories",
            Self::Workspace => "Project-specific instructions (e.g., .claude/claude.md)",
        }
    }

    /// Only workspace instructions carry a project name.
    #[must_use]
    pub const fn allows_project(&self) -> bool {
        matches!(self, Self::Workspace)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "memory" => Ok(Self::Memory),
            "workspace" => Ok(Self::Workspace),
            other => Err(format!("unknown item type: {other}")),
        }
    }
}

/// A committed item.
///
/// Wire names are `type`, `ide`, `createdAt` and `updatedAt`; export files
/// written by the browser vault import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,

    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Catalog tool id, see [`crate::model::tool`].
    #[serde(rename = "ide")]
    pub tool: String,

    pub title: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Build a committed item from a draft.
    ///
    /// The draft is expected to be normalized already; see
    /// [`ItemDraft::normalized`].
    #[must_use]
    pub fn from_draft(id: ItemId, draft: ItemDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: draft.kind,
            tool: draft.tool,
            title: draft.title,
            content: draft.content,
            project: draft.project,
            tags: draft.tags,
            created_at,
            updated_at: None,
        }
    }

    /// Copy the editable fields into a scratch draft.
    #[must_use]
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            kind: self.kind,
            tool: self.tool.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            project: self.project.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Case-insensitive substring match over title, content, project and tags.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .project
                .as_ref()
                .is_some_and(|p| p.to_lowercase().contains(needle))
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// The user-editable part of an item, before it is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub kind: ItemKind,
    pub tool: String,
    pub title: String,
    pub content: String,
    pub project: Option<String>,
    pub tags: Vec<String>,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            kind: ItemKind::Prompt,
            tool: crate::model::tool::DEFAULT_TOOL.to_string(),
            title: String::new(),
            content: String::new(),
            project: None,
            tags: Vec::new(),
        }
    }
}

impl ItemDraft {
    #[must_use]
    pub fn new(kind: ItemKind, tool: &str, title: &str, content: &str) -> Self {
        Self {
            kind,
            tool: tool.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Both title and content are non-empty. Whitespace counts as text.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty()
    }

    /// Apply the save-time rules: strip blank tags, and drop the project
    /// unless this is a workspace instruction (or the project is blank).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.tags = crate::validate::strip_blank_tags(self.tags);
        if !self.kind.allows_project()
            || self.project.as_deref().is_some_and(crate::validate::is_blank)
        {
            self.project = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item::from_draft(
            ItemId::from("item_1"),
            ItemDraft::new(ItemKind::Prompt, "cursor", "React Generator", "Write a component")
                .with_tags(["ts", "frontend"]),
            Utc::now(),
        )
    }

    #[test]
    fn test_generated_ids_have_prefix_and_differ() {
        let a = ItemId::generate();
        let b = ItemId::generate();
        assert!(a.as_str().starts_with("item_"));
        assert_eq!(a.as_str().len(), "item_".len() + 12);
        assert_ne!(a, b);
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Workspace".parse::<ItemKind>(), Ok(ItemKind::Workspace));
        assert!("nonsense".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let mut item = sample_item();
        item.kind = ItemKind::Workspace;
        item.project = Some("api".to_string());

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "workspace");
        assert_eq!(value["ide"], "cursor");
        assert_eq!(value["project"], "api");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_none(), "absent until first edit");
    }

    #[test]
    fn test_decode_browser_export_record() {
        let raw = r#"{
            "ide": "claude-code",
            "type": "memory",
            "title": "Prefers tabs",
            "content": "Use tabs for indentation",
            "project": "",
            "tags": ["style"],
            "id": "1718000000000",
            "createdAt": "2024-06-10T06:13:20.000Z"
        }"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id.as_str(), "1718000000000");
        assert_eq!(item.kind, ItemKind::Memory);
        assert_eq!(item.tool, "claude-code");
        // Imports are taken verbatim; normalization only happens on add/edit.
        assert_eq!(item.project.as_deref(), Some(""));
        assert!(item.updated_at.is_none());
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let raw = r#"{"id":"x","type":"prompt","ide":"zed","title":"t","content":"c",
                      "createdAt":"2025-01-01T00:00:00Z"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_matches_text_is_case_insensitive_across_fields() {
        let mut item = sample_item();
        assert!(item.matches_text("react"));
        assert!(item.matches_text("component"));
        assert!(item.matches_text("ts"));
        assert!(!item.matches_text("backend"));

        item.project = Some("Billing-API".to_string());
        assert!(item.matches_text("billing"));
    }

    #[test]
    fn test_normalized_clears_project_for_non_workspace() {
        let draft = ItemDraft::new(ItemKind::Memory, "cursor", "t", "c")
            .with_project("api")
            .with_tags(["a", " ", "", "b", "a"]);
        let draft = draft.normalized();
        assert_eq!(draft.project, None);
        assert_eq!(draft.tags, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_normalized_keeps_project_for_workspace() {
        let draft = ItemDraft::new(ItemKind::Workspace, "cursor", "t", "c").with_project("api");
        assert_eq!(draft.normalized().project.as_deref(), Some("api"));

        let blank = ItemDraft::new(ItemKind::Workspace, "cursor", "t", "c").with_project("  ");
        assert_eq!(blank.normalized().project, None);
    }

    #[test]
    fn test_required_fields() {
        assert!(!ItemDraft::default().has_required_fields());
        assert!(!ItemDraft::new(ItemKind::Prompt, "cursor", "title", "").has_required_fields());
        assert!(ItemDraft::new(ItemKind::Prompt, "cursor", "title", "body").has_required_fields());
        assert!(ItemDraft::new(ItemKind::Prompt, "cursor", " ", "   ").has_required_fields());
    }
}
