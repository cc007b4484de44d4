//! Item command implementations (add, list, show, edit, delete, copy).

use crate::cli::commands::{not_found, open_store, parse_kind, parse_tool, read_content};
use crate::cli::render::{print_full, print_summary};
use crate::cli::{AddArgs, EditArgs, ListArgs};
use crate::clipboard::copy_to_clipboard;
use crate::config::load_theme;
use crate::error::{Error, Result};
use crate::model::{Item, ItemDraft, ItemId};
use crate::store::SearchQuery;
use crate::validate::{parse_kind_filter, parse_tags, parse_tool_filter};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Output for list.
#[derive(Serialize)]
struct ListOutput<'a> {
    items: Vec<&'a Item>,
    count: usize,
    total: usize,
}

/// Output for add/edit/delete.
#[derive(Serialize)]
struct MutationOutput<'a> {
    id: &'a str,
    action: &'a str,
    dry_run: bool,
}

fn print_mutation(id: &ItemId, action: &str, json: bool, human: &str) -> Result<()> {
    if crate::is_silent() {
        println!("{id}");
        return Ok(());
    }

    if json {
        let output = MutationOutput {
            id: id.as_str(),
            action,
            dry_run: crate::is_dry_run(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{human}");
    }
    Ok(())
}

/// Execute `add`.
pub fn execute_add(args: &AddArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let kind = parse_kind(&args.kind)?;
    let tool = parse_tool(&args.ide)?;
    let content = read_content(args.content.as_deref(), args.file.as_deref())?.unwrap_or_default();

    let mut draft = ItemDraft::new(kind, &tool, &args.title, &content);
    draft.project.clone_from(&args.project);
    if let Some(tags) = &args.tags {
        draft.tags = parse_tags(tags);
    }

    if !draft.has_required_fields() {
        return Err(Error::RequiredField("title and content".to_string()));
    }

    if crate::is_dry_run() {
        let preview = draft.normalized();
        if json {
            println!("{}", serde_json::to_string(&preview)?);
        } else {
            println!("Would add {} \"{}\" for {}", preview.kind, preview.title, preview.tool);
        }
        return Ok(());
    }

    let mut store = open_store(db_path)?;
    let id = store
        .add(draft)?
        .ok_or_else(|| Error::RequiredField("title and content".to_string()))?;

    print_mutation(&id, "added", json, &format!("Added {kind}: {id}"))
}

/// Execute `list` (search with filters).
pub fn execute_list(args: &ListArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let kind = parse_kind_filter(&args.kind)
        .map_err(|(input, suggestion)| Error::InvalidType { input, suggestion })?;
    let tool = parse_tool_filter(&args.ide)
        .map_err(|(input, suggestion)| Error::InvalidTool { input, suggestion })?;

    let query = SearchQuery::text(args.query.as_deref().unwrap_or(""))
        .with_kind(kind)
        .with_tool(tool.as_deref());

    let store = open_store(db_path)?;
    let items = store.search(&query);
    debug!(matched = items.len(), total = store.len(), "Search complete");

    if crate::is_csv() {
        println!("id,type,ide,title,project,tags,content");
        for item in &items {
            println!(
                "{},{},{},{},{},{},{}",
                crate::csv_escape(item.id.as_str()),
                item.kind,
                crate::csv_escape(&item.tool),
                crate::csv_escape(&item.title),
                crate::csv_escape(item.project.as_deref().unwrap_or("")),
                crate::csv_escape(&item.tags.join(";")),
                crate::csv_escape(&item.content),
            );
        }
    } else if json {
        let output = ListOutput {
            count: items.len(),
            total: store.len(),
            items,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else if items.is_empty() {
        if store.is_empty() {
            println!("No items yet. Add one with `cv add`.");
        } else {
            println!("No items match.");
        }
    } else {
        let theme = load_theme(store.storage())?;
        println!("Items ({} of {}):", items.len(), store.len());
        println!();
        for item in &items {
            print_summary(item, theme);
        }
    }

    Ok(())
}

/// Execute `show`.
pub fn execute_show(id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let id = ItemId::from(id);
    let item = store.get(&id).ok_or_else(|| not_found(&store, &id))?;

    if json {
        println!("{}", serde_json::to_string(item)?);
    } else {
        print_full(item, load_theme(store.storage())?);
    }
    Ok(())
}

/// Execute `edit`: take the edit lock, apply the changes to the draft, then
/// commit (or cancel, for `--dry-run`).
pub fn execute_edit(args: &EditArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    if !args.has_changes() {
        return Err(Error::InvalidArgument(
            "nothing to change; pass at least one field flag".to_string(),
        ));
    }

    let kind = args.kind.as_deref().map(parse_kind).transpose()?;
    let tool = args.ide.as_deref().map(parse_tool).transpose()?;
    let content = read_content(args.content.as_deref(), args.file.as_deref())?;

    let mut store = open_store(db_path)?;
    let id = ItemId::from(args.id.as_str());
    if !store.begin_edit(&id) {
        return Err(not_found(&store, &id));
    }

    let draft = store
        .edit_draft_mut()
        .ok_or_else(|| Error::Other("edit lock taken but no draft".to_string()))?;
    if let Some(title) = &args.title {
        draft.title.clone_from(title);
    }
    if let Some(content) = content {
        draft.content = content;
    }
    if let Some(kind) = kind {
        draft.kind = kind;
    }
    if let Some(tool) = tool {
        draft.tool = tool;
    }
    if let Some(project) = &args.project {
        draft.project = Some(project.clone());
    }
    if let Some(tags) = &args.tags {
        draft.tags = parse_tags(tags);
    }

    if crate::is_dry_run() {
        let preview = draft.clone().normalized();
        store.cancel_edit();
        if json {
            println!("{}", serde_json::to_string(&preview)?);
        } else {
            println!("Would update {id}: \"{}\" [{}]", preview.title, preview.kind);
        }
        return Ok(());
    }

    if store.commit_edit()?.is_none() {
        store.cancel_edit();
        return Err(Error::RequiredField("title and content".to_string()));
    }

    print_mutation(&id, "updated", json, &format!("Updated: {id}"))
}

/// Execute `delete`.
pub fn execute_delete(id: &str, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = open_store(db_path)?;
    let id = ItemId::from(id);

    if store.get(&id).is_none() {
        return Err(not_found(&store, &id));
    }

    if !crate::is_dry_run() {
        store.delete(&id)?;
    }

    let human = if crate::is_dry_run() {
        format!("Would delete: {id}")
    } else {
        format!("Deleted: {id}")
    };
    print_mutation(&id, "deleted", json, &human)
}

/// Execute `copy`. A clipboard failure is logged, not returned.
pub fn execute_copy(id: &str, stdout: bool, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = open_store(db_path)?;
    let id = ItemId::from(id);
    let item = store.get(&id).ok_or_else(|| not_found(&store, &id))?;

    if stdout {
        print!("{}", item.content);
        return Ok(());
    }

    let copied = copy_to_clipboard(&item.content);
    if json {
        let output = serde_json::json!({ "id": id.as_str(), "copied": copied });
        println!("{output}");
    } else if copied {
        println!("Copied!");
    }
    Ok(())
}
