// Shiplog - changelog compilation and version bumping
// Compiles pending YAML change entries into CHANGELOG.md and rewrites
// version strings across configured files.

pub mod bump;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod render;
pub mod sources;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use config::Config;
pub use error::ShiplogError;
pub use models::{ChangeEntry, ChangeSet};
