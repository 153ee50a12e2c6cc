//! Entry store: discovery, parsing, and removal of change-entry files

use crate::error::ShiplogError;
use crate::models::ChangeEntry;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Enumerate every `.yml`/`.yaml` file under `source_dir`, sorted by full
/// path. Entry filenames are timestamp-prefixed, so path order is
/// publication order.
fn matched_files(source_dir: &Path) -> Result<Vec<PathBuf>> {
    if !source_dir.exists() {
        return Err(ShiplogError::SourceNotFound(source_dir.to_path_buf()).into());
    }

    let mut matched = Vec::new();
    for extension in ["yml", "yaml"] {
        let pattern = format!("{}/**/*.{}", source_dir.display(), extension);
        for path in glob::glob(&pattern)? {
            matched.push(path?);
        }
    }

    matched.sort();
    Ok(matched)
}

/// Load every pending entry under `source_dir` in sorted-path order.
///
/// A source directory with no matching files yields an empty list.
pub fn load(source_dir: &Path) -> Result<Vec<ChangeEntry>> {
    let mut entries = Vec::new();
    for path in matched_files(source_dir)? {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        // A blank file is a blank entry, not an error.
        let entry: Option<ChangeEntry> = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        entries.push(entry.unwrap_or_default());
    }
    Ok(entries)
}

/// Delete every pending entry under `source_dir`, returning the deleted
/// paths. Clearing an already-empty directory returns an empty list.
pub fn clear(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let matched = matched_files(source_dir)?;
    for path in &matched {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(matched)
}
