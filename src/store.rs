//! The item repository.
//!
//! [`ItemStore`] owns the authoritative newest-first list of items, the
//! single edit lock, and write-through persistence into a [`SlotStore`].
//!
//! # Invariants
//!
//! - Items created through [`ItemStore::add`] get an id not already present.
//! - Items committed through add/edit have non-empty title and content, and
//!   carry a project only when they are workspace instructions.
//! - At most one item is under edit (`editing`), process-wide.
//! - Every mutation writes the full list before it becomes visible; a failed
//!   write leaves the in-memory list as it was.
//!
//! Required-field failures are silent: the operation returns `None`/`false`
//! and logs at debug level. Only import parse failures and storage errors
//! come back as `Err`.

use crate::error::{Error, Result};
use crate::model::{Item, ItemDraft, ItemId, ItemKind};
use crate::storage::{ITEMS_SLOT, SlotStore};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Filter for [`ItemStore::search`]. `None` filters mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub kind: Option<ItemKind>,
    pub tool: Option<String>,
}

impl SearchQuery {
    /// Match everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Option<ItemKind>) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_tool(mut self, tool: Option<&str>) -> Self {
        self.tool = tool.map(ToString::to_string);
        self
    }

    fn matches(&self, item: &Item, needle: &str) -> bool {
        self.kind.is_none_or(|k| item.kind == k)
            && self.tool.as_deref().is_none_or(|t| item.tool == t)
            && item.matches_text(needle)
    }
}

/// Decode an import document: a JSON array of item records.
///
/// Records must have the item shape; their values are not otherwise checked.
///
/// # Errors
///
/// Returns [`Error::ImportFormat`] if the text is not such an array.
pub fn parse_import(text: &str) -> Result<Vec<Item>> {
    serde_json::from_str(text).map_err(|e| Error::ImportFormat(e.to_string()))
}

/// The item under edit and its scratch copy.
#[derive(Debug, Clone)]
struct EditSession {
    id: ItemId,
    draft: ItemDraft,
}

/// Repository over the persisted item list.
#[derive(Debug)]
pub struct ItemStore<S: SlotStore> {
    items: Vec<Item>,
    editing: Option<EditSession>,
    storage: S,
}

impl<S: SlotStore> ItemStore<S> {
    /// Load the item list from `storage`, or start empty if the slot was
    /// never written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptStore`] if the slot holds undecodable JSON,
    /// or a storage error if the slot cannot be read.
    pub fn open(storage: S) -> Result<Self> {
        let items = match storage.load(ITEMS_SLOT)? {
            Some(raw) => serde_json::from_str::<Vec<Item>>(&raw)
                .map_err(|e| Error::CorruptStore(e.to_string()))?,
            None => Vec::new(),
        };
        debug!(count = items.len(), "Item store loaded");

        Ok(Self {
            items,
            editing: None,
            storage,
        })
    }

    /// All items, newest first.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with this id (imports may bring duplicates).
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// The persistence backend, for reading other slots.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Commit a draft as a new item at the front of the list.
    ///
    /// Returns `Ok(None)` without touching anything if title or content is
    /// blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted.
    pub fn add(&mut self, draft: ItemDraft) -> Result<Option<ItemId>> {
        if !draft.has_required_fields() {
            debug!("Add ignored: title and content are required");
            return Ok(None);
        }

        let id = self.fresh_id();
        let item = Item::from_draft(id.clone(), draft.normalized(), Utc::now());
        let kind = item.kind;

        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.push(item);
        next.extend(self.items.iter().cloned());
        self.persist(next)?;

        info!(id = %id, kind = %kind, "Item added");
        Ok(Some(id))
    }

    /// Remove every item with this id. Returns whether anything was removed.
    ///
    /// Deleting the item under edit also ends the edit.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted.
    pub fn delete(&mut self, id: &ItemId) -> Result<bool> {
        if self.get(id).is_none() {
            debug!(id = %id, "Delete ignored: no such item");
            return Ok(false);
        }

        let next: Vec<Item> = self
            .items
            .iter()
            .filter(|item| &item.id != id)
            .cloned()
            .collect();
        self.persist(next)?;

        if self.editing_id() == Some(id) {
            debug!(id = %id, "Edited item deleted, cancelling edit");
            self.editing = None;
        }

        info!(id = %id, "Item deleted");
        Ok(true)
    }

    /// Take the edit lock on `id` and copy the item into a scratch draft.
    ///
    /// Returns `false` if another item is being edited or `id` is unknown.
    /// Calling it again for the item already under edit keeps the current
    /// draft and returns `true`.
    pub fn begin_edit(&mut self, id: &ItemId) -> bool {
        if let Some(session) = &self.editing {
            if &session.id != id {
                debug!(editing = %session.id, requested = %id, "Edit already in progress");
                return false;
            }
            return true;
        }

        let Some(item) = self.get(id) else {
            debug!(id = %id, "Edit ignored: no such item");
            return false;
        };

        self.editing = Some(EditSession {
            id: id.clone(),
            draft: item.to_draft(),
        });
        true
    }

    /// Id of the item currently under edit.
    #[must_use]
    pub fn editing_id(&self) -> Option<&ItemId> {
        self.editing.as_ref().map(|session| &session.id)
    }

    #[must_use]
    pub fn edit_draft(&self) -> Option<&ItemDraft> {
        self.editing.as_ref().map(|session| &session.draft)
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut ItemDraft> {
        self.editing.as_mut().map(|session| &mut session.draft)
    }

    /// Write the scratch draft back over every item with the edited id, in
    /// place.
    ///
    /// Returns `Ok(None)` and keeps the edit open if no edit is active or the
    /// draft lacks a title or content.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated list cannot be persisted; the edit
    /// stays open in that case.
    pub fn commit_edit(&mut self) -> Result<Option<ItemId>> {
        let Some(session) = &self.editing else {
            debug!("Commit ignored: no edit in progress");
            return Ok(None);
        };

        if !session.draft.has_required_fields() {
            debug!(id = %session.id, "Commit ignored: title and content are required");
            return Ok(None);
        }

        let id = session.id.clone();
        let draft = session.draft.clone().normalized();

        let Some(created_at) = self.get(&id).map(|item| item.created_at) else {
            warn!(id = %id, "Edited item no longer exists, dropping edit");
            self.editing = None;
            return Ok(None);
        };

        // Imports may duplicate ids; every copy takes the edit.
        let mut updated = Item::from_draft(id.clone(), draft, created_at);
        updated.updated_at = Some(Utc::now());
        let next: Vec<Item> = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    updated.clone()
                } else {
                    item.clone()
                }
            })
            .collect();
        self.persist(next)?;
        self.editing = None;

        info!(id = %id, "Item updated");
        Ok(Some(id))
    }

    /// Drop the scratch draft and release the edit lock.
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            debug!(id = %session.id, "Edit cancelled");
        }
    }

    /// Items passing the type and tool filters whose title, content,
    /// project or tags contain `query.text` (case-insensitive), in list
    /// order.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<&Item> {
        let needle = query.text.to_lowercase();
        self.items
            .iter()
            .filter(|item| query.matches(item, &needle))
            .collect()
    }

    /// Pretty-printed JSON array of every item, ignoring any filter.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_all(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    /// Append the items of a JSON array document to the end of the list,
    /// verbatim. Returns how many were appended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImportFormat`] without changing anything if the text
    /// is not an array of item records, or a storage error if persisting
    /// fails.
    pub fn import_merge(&mut self, text: &str) -> Result<usize> {
        let imported = parse_import(text)?;
        let count = imported.len();
        if count == 0 {
            debug!("Import contained no items");
            return Ok(0);
        }

        let mut next = self.items.clone();
        next.extend(imported);
        self.persist(next)?;

        info!(count, "Items imported");
        Ok(count)
    }

    /// Write `next` to storage, then make it the current list.
    fn persist(&mut self, next: Vec<Item>) -> Result<()> {
        let encoded = serde_json::to_string(&next)?;
        self.storage.save(ITEMS_SLOT, &encoded)?;
        self.items = next;
        Ok(())
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
