//! Static catalog of AI coding tools an item can target.

use serde::Serialize;

/// One supported tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Stable id stored on items (`ide` on the wire).
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Where the tool reads project instructions from.
    pub instruction_file: &'static str,
}

/// Tool preselected for new drafts.
pub const DEFAULT_TOOL: &str = "cursor";

pub const TOOLS: &[Tool] = &[
    Tool {
        id: "cursor",
        name: "Cursor",
        instruction_file: ".cursor/rules",
    },
    Tool {
        id: "claude-code",
        name: "Claude Code",
        instruction_file: ".claude/claude.md",
    },
    Tool {
        id: "windsurf",
        name: "Windsurf",
        instruction_file: ".windsurf/rules",
    },
    Tool {
        id: "cline",
        name: "Cline",
        instruction_file: ".cline/instructions.md",
    },
    Tool {
        id: "github-copilot",
        name: "GitHub Copilot",
        instruction_file: ".github/copilot-instructions.md",
    },
    Tool {
        id: "augment-code",
        name: "Augment Code",
        instruction_file: ".augment/instructions",
    },
    Tool {
        id: "trae",
        name: "Trae",
        instruction_file: ".trae/config",
    },
    Tool {
        id: "zed",
        name: "Zed",
        instruction_file: ".zed/settings.json",
    },
    Tool {
        id: "void",
        name: "Void",
        instruction_file: ".void/rules",
    },
    Tool {
        id: "replit-ghostwriter",
        name: "Replit Ghostwriter",
        instruction_file: ".replit",
    },
    Tool {
        id: "codellm",
        name: "CodeLLM",
        instruction_file: ".codellm/config",
    },
    Tool {
        id: "tabnine",
        name: "Tabnine",
        instruction_file: ".tabnine",
    },
    Tool {
        id: "codewhisperer",
        name: "CodeWhisperer",
        instruction_file: ".aws/codewhisperer",
    },
    Tool {
        id: "jetbrains-ai",
        name: "JetBrains AI",
        instruction_file: ".idea/ai-assistant.xml",
    },
    Tool {
        id: "qodo-gen",
        name: "Qodo Gen",
        instruction_file: ".qodo/config",
    },
];

/// Look up a tool by id (exact match).
#[must_use]
pub fn find_tool(id: &str) -> Option<&'static Tool> {
    TOOLS.iter().find(|t| t.id == id)
}

/// Display name for a tool id, falling back to the raw id for tools the
/// catalog doesn't know (possible with imported items).
#[must_use]
pub fn tool_label(id: &str) -> &str {
    find_tool(id).map_or(id, |t| t.name)
}
