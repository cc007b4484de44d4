//! Terminal rendering for items.

use crate::config::Theme;
use crate::model::{Item, ItemKind, tool_label};
use colored::{ColoredString, Colorize};

/// Truncate to `max` characters, appending `...` when cut.
#[must_use]
pub fn truncate(s: &str, max: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    if first_line.chars().count() > max || first_line.len() < s.trim_end().len() {
        let cut: String = first_line.chars().take(max).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}

/// Colour a type label: prompts blue, memories purple, workspace green.
#[must_use]
pub fn kind_label(kind: ItemKind, theme: Theme) -> ColoredString {
    let label = kind.as_str();
    match (kind, theme) {
        (ItemKind::Prompt, Theme::Light) => label.blue(),
        (ItemKind::Prompt, Theme::Dark) => label.bright_blue(),
        (ItemKind::Memory, Theme::Light) => label.magenta(),
        (ItemKind::Memory, Theme::Dark) => label.bright_magenta(),
        (ItemKind::Workspace, Theme::Light) => label.green(),
        (ItemKind::Workspace, Theme::Dark) => label.bright_green(),
    }
}

fn dim(s: &str, theme: Theme) -> ColoredString {
    match theme {
        Theme::Light => s.dimmed(),
        Theme::Dark => s.white(),
    }
}

/// One-entry summary used by `list`.
pub fn print_summary(item: &Item, theme: Theme) {
    println!(
        "[{}] {}  {}  {}",
        kind_label(item.kind, theme),
        item.title.bold(),
        dim(&format!("({})", tool_label(&item.tool)), theme),
        dim(item.id.as_str(), theme),
    );
    println!("    {}", truncate(&item.content, 100));
    if let Some(meta) = meta_line(item) {
        println!("    {}", dim(&meta, theme));
    }
    println!();
}

/// Full entry used by `show`.
pub fn print_full(item: &Item, theme: Theme) {
    println!("{} {}", kind_label(item.kind, theme), item.title.bold());
    println!("  ID:       {}", item.id);
    println!("  Tool:     {}", tool_label(&item.tool));
    if let Some(tool) = crate::model::find_tool(&item.tool) {
        println!("  File:     {}", tool.instruction_file);
    }
    if let Some(project) = &item.project {
        println!("  Project:  {project}");
    }
    if !item.tags.is_empty() {
        println!("  Tags:     {}", item.tags.join(", "));
    }
    println!("  Created:  {}", item.created_at.to_rfc3339());
    if let Some(updated) = item.updated_at {
        println!("  Updated:  {}", updated.to_rfc3339());
    }
    println!();
    println!("{}", item.content);
}

fn meta_line(item: &Item) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(project) = &item.project {
        parts.push(format!("project: {project}"));
    }
    if !item.tags.is_empty() {
        let tags: Vec<String> = item.tags.iter().map(|t| format!("#{t}")).collect();
        parts.push(tags.join(" "));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("  "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemDraft, ItemId};
    use chrono::Utc;

    #[test]
    fn test_truncate_short_single_line() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_line() {
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_truncate_multiline_marks_continuation() {
        assert_eq!(truncate("first\nsecond", 100), "first...");
    }

    #[test]
    fn test_meta_line() {
        let draft = ItemDraft::new(ItemKind::Workspace, "cursor", "t", "c")
            .with_project("web")
            .with_tags(["ts", "react"]);
        let item = Item::from_draft(ItemId::from("x"), draft, Utc::now());
        assert_eq!(meta_line(&item).as_deref(), Some("project: web  #ts #react"));

        let bare = Item::from_draft(
            ItemId::from("y"),
            ItemDraft::new(ItemKind::Prompt, "cursor", "t", "c"),
            Utc::now(),
        );
        assert_eq!(meta_line(&bare), None);
    }
}
