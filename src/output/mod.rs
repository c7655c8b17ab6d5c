// Output formatting — terminal tables and JSON.

pub mod terminal;

use anyhow::Result;

use crate::matrix::DocTermMatrix;

/// Output format for a built matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored table, one row per document
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name as given in `DOCTERM_FORMAT`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Serialize a matrix as pretty JSON.
pub fn to_json(matrix: &DocTermMatrix) -> Result<String> {
    Ok(serde_json::to_string_pretty(matrix)?)
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte names never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
