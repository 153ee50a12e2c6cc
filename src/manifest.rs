//! Package manifest version resolution and bump

use crate::bump;
use crate::error::ShiplogError;
use anyhow::{Context, Result};
use std::path::Path;

pub const MANIFEST_FILE: &str = "Cargo.toml";

// Rewriting through the bump engine keeps the manifest's formatting intact.
const VERSION_TEMPLATE: &str = "version = \"<version>\"";

/// Read `package.version` from the project manifest.
///
/// Resolved once at the start of a run and threaded through explicitly;
/// there is no cached process-wide version state.
pub fn current_version(project_root: &Path) -> Result<String> {
    let manifest_path = project_root.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let manifest: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

    match manifest
        .get("package")
        .and_then(|package| package.get("version"))
        .and_then(|version| version.as_str())
    {
        Some(version) => Ok(version.to_string()),
        None => Err(ShiplogError::MissingManifestVersion(manifest_path).into()),
    }
}

/// Rewrite the manifest's version string in place.
///
/// Returns the replacement count (0 when the manifest no longer carries the
/// old version verbatim).
pub fn bump(
    project_root: &Path,
    old_version: &str,
    new_version: &str,
    dry_run: bool,
) -> Result<usize> {
    let manifest_path = project_root.join(MANIFEST_FILE);
    bump::apply(
        &manifest_path,
        &[VERSION_TEMPLATE.to_string()],
        old_version,
        new_version,
        dry_run,
    )
}
