//! Error types for Context Vault.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=storage, 3=not_found, 4=validation, etc.)
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers
//!
//! Required-field failures inside [`crate::store::ItemStore`] are silent
//! no-ops; only the CLI turns them into [`Error::RequiredField`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Context Vault operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Storage (exit 2)
    DatabaseError,
    CorruptStore,

    // Not Found (exit 3)
    ItemNotFound,
    FileNotFound,

    // Validation (exit 4)
    InvalidType,
    InvalidTool,
    InvalidArgument,
    RequiredField,

    // Import (exit 6)
    ImportFormat,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::DatabaseError => "DATABASE_ERROR",
            Self::CorruptStore => "CORRUPT_STORE",
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::FileNotFound => "FILE_NOT_FOUND",
            Self::InvalidType => "INVALID_TYPE",
            Self::InvalidTool => "INVALID_TOOL",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::RequiredField => "REQUIRED_FIELD",
            Self::ImportFormat => "IMPORT_FORMAT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::DatabaseError | Self::CorruptStore => 2,
            Self::ItemNotFound | Self::FileNotFound => 3,
            Self::InvalidType | Self::InvalidTool | Self::InvalidArgument | Self::RequiredField => 4,
            Self::ImportFormat => 6,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether retrying with corrected input can succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InvalidType
                | Self::InvalidTool
                | Self::InvalidArgument
                | Self::RequiredField
                | Self::ImportFormat
                | Self::DatabaseError
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in Context Vault operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {id}")]
    ItemNotFound { id: String },

    #[error("Item not found: {id} (did you mean: {}?)", similar.join(", "))]
    ItemNotFoundSimilar { id: String, similar: Vec<String> },

    #[error("Invalid item type: {input}")]
    InvalidType {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Unknown tool: {input}")]
    InvalidTool {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Missing required field: {0}")]
    RequiredField(String),

    #[error("Invalid file format: {0}")]
    ImportFormat(String),

    #[error("Stored items could not be read: {0}")]
    CorruptStore(String),

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::ItemNotFound { .. } | Self::ItemNotFoundSimilar { .. } => ErrorCode::ItemNotFound,
            Self::FileNotFound { .. } => ErrorCode::FileNotFound,
            Self::InvalidType { .. } => ErrorCode::InvalidType,
            Self::InvalidTool { .. } => ErrorCode::InvalidTool,
            Self::RequiredField(_) => ErrorCode::RequiredField,
            Self::ImportFormat(_) => ErrorCode::ImportFormat,
            Self::CorruptStore(_) => ErrorCode::CorruptStore,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ItemNotFound { id } => Some(format!(
                "No item with ID '{id}'. Use `cv list` to see stored items."
            )),
            Self::ItemNotFoundSimilar { similar, .. } => {
                Some(format!("Did you mean: {}?", similar.join(", ")))
            }

            Self::InvalidType { suggestion, .. } => Some(match suggestion {
                Some(s) => format!("Did you mean '{s}'? Valid types: prompt, memory, workspace"),
                None => "Valid types: prompt, memory, workspace".to_string(),
            }),

            Self::InvalidTool { suggestion, .. } => Some(match suggestion {
                Some(s) => format!("Did you mean '{s}'? Use `cv tools` to list supported tools."),
                None => "Use `cv tools` to list supported tools.".to_string(),
            }),

            Self::RequiredField(_) => {
                Some("Title and content are both required; nothing was saved.".to_string())
            }

            Self::ImportFormat(_) => Some(
                "Expected a JSON array of items, as written by `cv export`.".to_string(),
            ),

            Self::CorruptStore(_) => Some(
                "The item slot in the database holds unreadable JSON. \
                 Point --db at a fresh file or repair the `slots` table."
                    .to_string(),
            ),

            Self::Database(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::FileNotFound { .. }
            | Self::InvalidArgument(_)
            | Self::Config(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
