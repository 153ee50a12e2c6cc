//! `shiplog generate` - scaffold a pending entry file

use crate::config::Config;
use crate::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

// Categories the renderer recognizes; anything else is ignored.
const ENTRY_SKELETON: &str = "new: []\nupdated: []\nfixed: []\n";

pub fn run(name: &str) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = Config::load(&project_root)?;
    let path = generate_at(&config, name)?;
    println!(
        "{} Created {}",
        "✔".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}

/// Write a timestamp-prefixed entry skeleton into the source directory,
/// creating the directory if needed. The prefix keeps entries in
/// publication order when they are later globbed and sorted.
pub fn generate_at(config: &Config, name: &str) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    generate_stamped(&config.source, &format!("{}_{}.yml", stamp, name))
}

fn generate_stamped(source_dir: &Path, file_name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(source_dir)
        .with_context(|| format!("Failed to create {}", source_dir.display()))?;

    let path = source_dir.join(file_name);
    std::fs::write(&path, ENTRY_SKELETON)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
