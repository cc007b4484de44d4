//! CLI definitions using clap.

use crate::config::Theme;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for list/query commands.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Table,
    /// JSON (same as --json)
    Json,
    /// Comma-separated values
    Csv,
}

pub mod commands;
pub mod render;

/// Context Vault - prompts, memories and workspace instructions for AI coding tools
#[derive(Parser, Debug)]
#[command(name = "cv", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (default: ~/.context-vault/data/vault.db)
    #[arg(long, global = true, env = "CV_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (table, json, csv)
    #[arg(long, value_enum, global = true, default_value_t)]
    pub format: OutputFormat,

    /// Output only the item ID (for scripting)
    #[arg(long, global = true)]
    pub silent: bool,

    /// Preview changes without writing to the database
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a prompt, memory or workspace instruction
    Add(AddArgs),

    /// List items, optionally searching and filtering
    #[command(alias = "search")]
    List(ListArgs),

    /// Show one item in full
    Show {
        /// Item ID
        id: String,
    },

    /// Edit an item
    Edit(EditArgs),

    /// Delete an item
    Delete {
        /// Item ID
        id: String,
    },

    /// Copy an item's content to the clipboard
    Copy {
        /// Item ID
        id: String,

        /// Print the raw content instead of using the clipboard
        #[arg(long)]
        stdout: bool,
    },

    /// Export every item to a JSON file
    Export {
        /// Output path (default: ./ai-ide-data-YYYY-MM-DD.json, `-` for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append items from a JSON file written by `export`
    Import {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// List supported AI coding tools
    Tools,

    /// List item types
    Types,

    /// Show or set the colour theme
    Theme {
        /// New theme
        #[arg(value_enum)]
        theme: Option<Theme>,
    },

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Title
    pub title: String,

    /// Content text
    #[arg(short, long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read content from a file (`-` for stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Item type (prompt, memory, workspace)
    #[arg(short = 't', long = "type", default_value = "prompt")]
    pub kind: String,

    /// Target tool (see `cv tools`)
    #[arg(short, long, default_value = crate::model::DEFAULT_TOOL)]
    pub ide: String,

    /// Project name (workspace instructions only)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive text to look for in title, content, project and tags
    pub query: Option<String>,

    /// Filter by type (all, prompt, memory, workspace)
    #[arg(short = 't', long = "type", default_value = "all")]
    pub kind: String,

    /// Filter by tool (all or a tool id)
    #[arg(short, long, default_value = "all")]
    pub ide: String,
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Item ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(short, long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read new content from a file (`-` for stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// New type
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// New tool
    #[arg(short, long)]
    pub ide: Option<String>,

    /// New project (empty string clears it)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Replace tags (comma-separated, empty string clears them)
    #[arg(long)]
    pub tags: Option<String>,
}

impl EditArgs {
    /// Whether any field change was requested.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.content.is_some()
            || self.file.is_some()
            || self.kind.is_some()
            || self.ide.is_some()
            || self.project.is_some()
            || self.tags.is_some()
    }
}
