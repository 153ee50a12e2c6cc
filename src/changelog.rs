//! Splicing rendered fragments into the changelog document

use crate::error::ShiplogError;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

const DEFAULT_TITLE: &str = "CHANGELOG";

/// Splice `fragment` into the changelog at `dest_path`.
///
/// An empty fragment is a no-op and leaves the file untouched. A missing
/// destination is created with a synthesized `# CHANGELOG` title. When the
/// existing file opens with a `# Title` line the fragment is inserted right
/// below it; otherwise the fragment (plus the synthesized title) is
/// prepended to the existing content verbatim.
///
/// Fails with [`ShiplogError::DuplicateVersion`] when a `### {version}`
/// section is already present.
///
/// Returns the byte delta between the new and the original content, with a
/// missing original counted as length zero.
pub fn write(fragment: &str, version: &str, dest_path: &Path) -> Result<usize> {
    if fragment.is_empty() {
        return Ok(0);
    }

    let original = if dest_path.exists() {
        std::fs::read_to_string(dest_path)
            .with_context(|| format!("Failed to read {}", dest_path.display()))?
    } else {
        String::new()
    };

    // Dots are the only characters in a supported version label that need
    // escaping for a literal match.
    let escaped = version.replace('.', "\\.");
    let already_exists = Regex::new(&format!(r"(?m)^### *{}", escaped))?;
    if already_exists.is_match(&original) {
        return Err(ShiplogError::DuplicateVersion(version.to_string()).into());
    }

    // A title only counts on the very first line.
    let title = Regex::new(r"^# *.+\n")?;
    let full = match title.find(&original) {
        Some(found) => format!(
            "{}\n{}{}",
            &original[..found.end()],
            fragment,
            &original[found.end()..]
        ),
        None => format!("# {}\n\n{}\n{}", DEFAULT_TITLE, fragment, original),
    };

    std::fs::write(dest_path, &full)
        .with_context(|| format!("Failed to write {}", dest_path.display()))?;

    Ok(full.len() - original.len())
}
