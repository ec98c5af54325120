//! Export document loading.
//!
//! Reads a user-selected file and decodes it as JSON. Any failure here
//! stops the run before extraction.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::{AppError, Result};

/// Loads and decodes an export document.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid JSON.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read {}", path.display()), e))?;

    let document = parse_document(&content)?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Loaded export document");

    Ok(document)
}

/// Decodes export text as JSON.
///
/// # Errors
/// Returns error if the text is not valid JSON.
pub fn parse_document(content: &str) -> Result<Value> {
    serde_json::from_str(content.trim_start_matches('\u{feff}')).map_err(AppError::json_parse)
}
