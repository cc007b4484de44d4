//! End-to-end tests for the `cv` binary.
//!
//! Stdout is a pipe under test, so every command answers in JSON.

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Vault {
    dir: TempDir,
    db: PathBuf,
}

impl Vault {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("vault.db");
        Self { dir, db }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("cv").unwrap();
        cmd.env_remove("CV_DB")
            .env_remove("CV_TEST_DB")
            .env_remove("RUST_LOG")
            .arg("--db")
            .arg(&self.db);
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().args(args).assert().success().get_output().stdout.clone();
        serde_json::from_slice(&output).unwrap()
    }

    fn add(&self, args: &[&str]) -> String {
        let mut full = vec!["add"];
        full.extend_from_slice(args);
        self.json(&full)["id"].as_str().unwrap().to_string()
    }

    fn list(&self, args: &[&str]) -> Vec<Value> {
        let mut full = vec!["list"];
        full.extend_from_slice(args);
        self.json(&full)["items"].as_array().unwrap().clone()
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn titles(items: &[Value]) -> Vec<&str> {
    items.iter().map(|i| i["title"].as_str().unwrap()).collect()
}

#[test]
fn add_then_list_newest_first() {
    let vault = Vault::new();
    vault.add(&["First", "--content", "one"]);
    vault.add(&["Second", "--content", "two", "--type", "memory", "--ide", "zed"]);

    let items = vault.list(&[]);
    assert_eq!(titles(&items), vec!["Second", "First"]);
    assert_eq!(items[0]["type"], "memory");
    assert_eq!(items[0]["ide"], "zed");
    assert!(items[0]["createdAt"].is_string());
    assert!(items[0].get("updatedAt").is_none());
}

#[test]
fn add_requires_title_and_content() {
    let vault = Vault::new();
    vault
        .cmd()
        .args(["add", "Empty", "--content", ""])
        .assert()
        .failure()
        .code(4);
    vault.cmd().args(["add", "No content"]).assert().failure().code(4);

    assert!(vault.list(&[]).is_empty());
}

#[test]
fn add_accepts_whitespace_only_text() {
    let vault = Vault::new();
    vault.add(&[" ", "--content", "  "]);

    let items = vault.list(&[]);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["content"], "  ");
}

#[test]
fn add_rejects_unknown_type_and_tool() {
    let vault = Vault::new();
    vault
        .cmd()
        .args(["add", "T", "-c", "c", "--type", "snippet"])
        .assert()
        .failure()
        .code(4);
    vault
        .cmd()
        .args(["add", "T", "-c", "c", "--ide", "notepad"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn project_is_kept_only_for_workspace_items() {
    let vault = Vault::new();
    vault.add(&["Rules", "-c", "use tabs", "--type", "workspace", "--project", "web"]);
    vault.add(&["Prompt", "-c", "hello", "--project", "web"]);

    let items = vault.list(&[]);
    assert!(items[0].get("project").is_none());
    assert_eq!(items[1]["project"], "web");
}

#[test]
fn search_filters_by_text_type_and_tool() {
    let vault = Vault::new();
    vault.add(&["React Generator", "-c", "Write a component", "--tags", "ts, react"]);
    vault.add(&["Prefs", "-c", "Use TypeScript", "--type", "memory", "--ide", "claude-code"]);
    vault.add(&["Repo rules", "-c", "lint", "--type", "workspace", "--project", "Frontend"]);

    assert_eq!(titles(&vault.list(&["REACT"])), vec!["React Generator"]);
    assert_eq!(titles(&vault.list(&["frontend"])), vec!["Repo rules"]);
    assert_eq!(titles(&vault.list(&["--type", "memory"])), vec!["Prefs"]);
    assert_eq!(titles(&vault.list(&["--ide", "claude-code"])), vec!["Prefs"]);
    assert!(vault.list(&["typescript", "--type", "prompt"]).is_empty());

    let via_alias = vault.json(&["search", "component"]);
    assert_eq!(via_alias["count"], 1);
    assert_eq!(via_alias["total"], 3);
}

#[test]
fn edit_updates_in_place() {
    let vault = Vault::new();
    let older = vault.add(&["Older", "-c", "x"]);
    vault.add(&["Newer", "-c", "y"]);

    vault.json(&["edit", &older, "--title", "Renamed", "--content", "z"]);

    let items = vault.list(&[]);
    assert_eq!(titles(&items), vec!["Newer", "Renamed"]);
    assert_eq!(items[1]["content"], "z");
    assert!(items[1]["updatedAt"].is_string());
}

#[test]
fn edit_dry_run_leaves_item_unchanged() {
    let vault = Vault::new();
    let id = vault.add(&["Keep", "-c", "x"]);

    let preview = vault.json(&["--dry-run", "edit", &id, "--title", "Changed"]);
    assert_eq!(preview["title"], "Changed");

    let items = vault.list(&[]);
    assert_eq!(titles(&items), vec!["Keep"]);
    assert!(items[0].get("updatedAt").is_none());
}

#[test]
fn edit_refuses_blank_title() {
    let vault = Vault::new();
    let id = vault.add(&["Keep", "-c", "x"]);

    vault
        .cmd()
        .args(["edit", &id, "--title", ""])
        .assert()
        .failure()
        .code(4);
    assert_eq!(titles(&vault.list(&[])), vec!["Keep"]);
}

#[test]
fn edit_and_delete_unknown_id_exit_not_found() {
    let vault = Vault::new();
    vault
        .cmd()
        .args(["edit", "item_missing", "--title", "x"])
        .assert()
        .failure()
        .code(3);
    vault.cmd().args(["delete", "item_missing"]).assert().failure().code(3);
}

#[test]
fn delete_removes_item() {
    let vault = Vault::new();
    let id = vault.add(&["Doomed", "-c", "x"]);
    vault.add(&["Survivor", "-c", "y"]);

    let output = vault.json(&["delete", &id]);
    assert_eq!(output["action"], "deleted");
    assert_eq!(titles(&vault.list(&[])), vec!["Survivor"]);
}

#[test]
fn show_and_copy_to_stdout() {
    let vault = Vault::new();
    let id = vault.add(&["Snippet", "-c", "line one\nline two"]);

    let item = vault.json(&["show", &id]);
    assert_eq!(item["title"], "Snippet");

    vault
        .cmd()
        .args(["copy", &id, "--stdout"])
        .assert()
        .success()
        .stdout("line one\nline two");
}

#[test]
fn export_then_import_into_fresh_vault() {
    let source = Vault::new();
    source.add(&["A", "-c", "1", "--tags", "x"]);
    source.add(&["B", "-c", "2", "--type", "workspace", "--project", "p"]);
    let file = source.path("backup.json");

    let exported = source.json(&["export", "--output", file.to_str().unwrap()]);
    assert_eq!(exported["count"], 2);
    let document: Vec<Value> = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(document.len(), 2);

    let target = Vault::new();
    target.add(&["Existing", "-c", "0"]);
    let imported = target.json(&["import", file.to_str().unwrap()]);
    assert_eq!(imported["imported"], 2);

    let items = target.list(&[]);
    assert_eq!(titles(&items), vec!["Existing", "B", "A"]);
    assert_eq!(items[1]["id"], document[0]["id"]);
    assert_eq!(items[1]["project"], "p");
}

#[test]
fn import_is_append_only_and_keeps_duplicates() {
    let vault = Vault::new();
    vault.add(&["Only", "-c", "1"]);
    let file = vault.path("self.json");
    vault.json(&["export", "-o", file.to_str().unwrap()]);

    vault.json(&["import", file.to_str().unwrap()]);
    let items = vault.list(&[]);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], items[1]["id"]);

    let id = items[0]["id"].as_str().unwrap().to_string();
    vault.json(&["edit", &id, "--title", "Edited"]);
    assert_eq!(titles(&vault.list(&[])), vec!["Edited", "Edited"]);
}

#[test]
fn export_defaults_to_dated_file_in_current_dir() {
    let vault = Vault::new();
    vault.add(&["A", "-c", "1"]);

    let output = vault
        .cmd()
        .current_dir(vault.dir.path())
        .arg("export")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let exported: Value = serde_json::from_slice(&output).unwrap();
    let name = exported["path"].as_str().unwrap();
    assert!(name.starts_with("ai-ide-data-"), "{name}");
    assert!(name.ends_with(".json"), "{name}");
    assert!(vault.path(name).exists());
}

#[test]
fn malformed_import_leaves_store_unchanged() {
    let vault = Vault::new();
    vault.add(&["Safe", "-c", "1"]);

    let bad = vault.path("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    vault
        .cmd()
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .code(6);

    let object = vault.path("object.json");
    std::fs::write(&object, r#"{"title": "not an array"}"#).unwrap();
    vault
        .cmd()
        .args(["import", object.to_str().unwrap()])
        .assert()
        .failure()
        .code(6);

    assert_eq!(titles(&vault.list(&[])), vec!["Safe"]);
}

#[test]
fn import_missing_file_is_not_found() {
    let vault = Vault::new();
    let missing = vault.path("nope.json");
    vault
        .cmd()
        .args(["import", missing.to_str().unwrap()])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn theme_persists() {
    let vault = Vault::new();
    assert_eq!(vault.json(&["theme"])["theme"], "light");

    let set = vault.json(&["theme", "dark"]);
    assert_eq!(set["changed"], true);
    assert_eq!(vault.json(&["theme"])["theme"], "dark");
}

#[test]
fn tools_and_types_catalogs() {
    let vault = Vault::new();
    let tools = vault.json(&["tools"]);
    let tools = tools.as_array().unwrap();
    assert_eq!(tools.len(), 15);
    assert_eq!(tools[0]["id"], "cursor");

    let kinds = vault.json(&["types"]);
    assert_eq!(kinds.as_array().unwrap().len(), 3);
}

#[test]
fn silent_add_prints_only_the_id() {
    let vault = Vault::new();
    let output = vault
        .cmd()
        .args(["--silent", "add", "Quiet", "-c", "x"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = String::from_utf8(output).unwrap();
    assert!(id.trim().starts_with("item_"));
    assert!(Path::new(&vault.db).exists());
}
