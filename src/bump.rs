//! Version bump engine: placeholder templates compiled to find/replace rules

use crate::error::ShiplogError;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

/// Placeholder token marking where the version appears in a template.
pub const PLACEHOLDER: &str = "<version>";

/// A compiled find/replace pair for one template.
#[derive(Debug)]
pub struct BumpPattern {
    find: Regex,
    replace: String,
}

/// Dots are the only characters in a supported version label that need
/// escaping for a literal match.
fn escape_version(version: &str) -> String {
    version.replace('.', "\\.")
}

/// Compile a template into a find/replace pair for one old → new rewrite.
///
/// The template is split on its `<version>` placeholder; the literal text
/// on either side is required, adjacent context for the match, each side
/// captured as a group only when non-empty so the replacement can reinsert
/// it verbatim around the new version. The context is used as regex source
/// directly, not escaped: callers supply regex-safe literal context.
///
/// Fails with [`ShiplogError::MissingPlaceholder`] when the template has no
/// placeholder.
pub fn compile(template: &str, old_version: &str, new_version: &str) -> Result<BumpPattern> {
    let Some(index) = template.find(PLACEHOLDER) else {
        return Err(ShiplogError::MissingPlaceholder(template.to_string()).into());
    };
    let before = &template[..index];
    let after = &template[index + PLACEHOLDER.len()..];

    let mut find = String::new();
    let mut replace = String::new();
    let mut group = 0;

    if !before.is_empty() {
        group += 1;
        find.push_str(&format!("({})", before));
        replace.push_str(&format!("${{{}}}", group));
    }
    find.push_str(&escape_version(old_version));
    replace.push_str(new_version);
    if !after.is_empty() {
        group += 1;
        find.push_str(&format!("({})", after));
        replace.push_str(&format!("${{{}}}", group));
    }

    let find =
        Regex::new(&find).with_context(|| format!("Invalid bump template '{}'", template))?;

    Ok(BumpPattern { find, replace })
}

/// Apply every template to the file at `path`, rewriting the old version to
/// the new one wherever the template context matches.
///
/// Patterns are applied globally, one pass per template, in template order.
/// Returns the total number of replacements across all templates. With
/// `dry_run` the count is computed and the file is left untouched.
pub fn apply(
    path: &Path,
    templates: &[String],
    old_version: &str,
    new_version: &str,
    dry_run: bool,
) -> Result<usize> {
    let patterns = templates
        .iter()
        .map(|template| compile(template, old_version, new_version))
        .collect::<Result<Vec<_>>>()?;

    let original = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut content = original.clone();
    let mut total = 0;
    for pattern in &patterns {
        total += pattern.find.find_iter(&content).count();
        content = pattern
            .find
            .replace_all(&content, pattern.replace.as_str())
            .into_owned();
    }

    if !dry_run && content != original {
        std::fs::write(path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(total)
}
