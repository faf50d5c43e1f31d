//! Formatting of staged files.

use crate::error::Result;
use crate::tree::{ChangeKind, Tree};
use log::debug;

/// Formats every file staged in a tree.
pub trait Formatter {
    fn format(&self, tree: &mut Tree) -> Result<()>;
}

/// Pretty-prints staged JSON files and normalizes trailing newlines of staged text files.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

/// Formats a single text file, or returns `None` when it should stay as is.
pub fn format_text(path: &str, content: &str) -> Option<String> {
    let body = if path.ends_with(".json") {
        match serde_json::from_str::<serde_json::Value>(content) {
            Ok(value) => serde_json::to_string_pretty(&value).ok()?,
            // Comments and trailing commas (tsconfig) are left to dedicated tooling.
            Err(_) => content.to_string(),
        }
    } else {
        content.to_string()
    };

    let trimmed = body.trim_end_matches(['\n', '\r']);
    if trimmed.is_empty() {
        return None;
    }
    let formatted = format!("{trimmed}\n");
    (formatted != content).then_some(formatted)
}

impl Formatter for JsonFormatter {
    fn format(&self, tree: &mut Tree) -> Result<()> {
        for change in tree.list_changes() {
            let content = match &change.kind {
                ChangeKind::Create(content) | ChangeKind::Update(content) => content,
                ChangeKind::Delete => continue,
            };
            let Ok(text) = std::str::from_utf8(content) else { continue };
            let path = change.path.to_string_lossy();
            if let Some(formatted) = format_text(&path, text) {
                debug!("Formatted '{path}'.");
                tree.write(&change.path, formatted);
            }
        }
        Ok(())
    }
}
