//! Writing username lists to text files.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::application::clipboard_text;
use crate::domain::{AppError, ListKind, Result};

/// Writes `usernames`, one per line, to `path`.
///
/// Parent directories are created as needed.
///
/// # Errors
/// Returns error if the directory or file cannot be written.
pub fn export_list(usernames: &[String], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::io(format!("Failed to create directory {}", parent.display()), e)
        })?;
    }

    fs::write(path, clipboard_text(usernames))
        .map_err(|e| AppError::io(format!("Failed to write {}", path.display()), e))?;

    tracing::info!(path = %path.display(), count = usernames.len(), "Exported list");

    Ok(())
}

/// File name for an export made now, e.g. `unfollowers_20250101_120000.txt`.
#[must_use]
pub fn default_export_filename(kind: ListKind) -> String {
    format!("{}_{}.txt", kind.slug(), Local::now().format("%Y%m%d_%H%M%S"))
}
