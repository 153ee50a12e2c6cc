use std::path::PathBuf;

/// Errors surfaced by the shiplog pipeline.
///
/// Everything here is fatal to the current run; the CLI layer formats the
/// error and maps it to a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum ShiplogError {
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("version {0} already exists in the changelog")]
    DuplicateVersion(String),

    #[error("bump template '{0}' is missing the <version> placeholder")]
    MissingPlaceholder(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} has no package version")]
    MissingManifestVersion(PathBuf),

    #[error("{0} is already the current version")]
    VersionUnchanged(String),
}
