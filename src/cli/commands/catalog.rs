//! `tools` and `types`: read-only listings of the built-in catalogs.

use crate::error::Result;
use crate::model::{ItemKind, TOOLS};
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
struct KindOutput {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    allows_project: bool,
}

/// Execute `tools`.
pub fn execute_tools(json: bool) -> Result<()> {
    if crate::is_csv() {
        println!("id,name,instruction_file");
        for tool in TOOLS {
            println!(
                "{},{},{}",
                tool.id,
                crate::csv_escape(tool.name),
                crate::csv_escape(tool.instruction_file)
            );
        }
    } else if json {
        println!("{}", serde_json::to_string(TOOLS)?);
    } else {
        println!("Supported tools ({}):", TOOLS.len());
        println!();
        for tool in TOOLS {
            println!(
                "  {:<20} {:<20} {}",
                tool.id.bold(),
                tool.name,
                tool.instruction_file.dimmed()
            );
        }
    }
    Ok(())
}

/// Execute `types`.
pub fn execute_types(json: bool) -> Result<()> {
    let kinds: Vec<KindOutput> = ItemKind::ALL
        .iter()
        .map(|kind| KindOutput {
            id: kind.as_str(),
            name: kind.display_name(),
            description: kind.description(),
            allows_project: kind.allows_project(),
        })
        .collect();

    if crate::is_csv() {
        println!("id,name,description");
        for kind in &kinds {
            println!(
                "{},{},{}",
                kind.id,
                crate::csv_escape(kind.name),
                crate::csv_escape(kind.description)
            );
        }
    } else if json {
        println!("{}", serde_json::to_string(&kinds)?);
    } else {
        for kind in &kinds {
            println!("  {:<10} {}", kind.id.bold(), kind.description);
        }
    }
    Ok(())
}
