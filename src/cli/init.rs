//! `shiplog init` - scaffold configuration and the entry source directory

use crate::config::{Config, CONFIG_FILE};
use crate::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Where pending changelog entries live.
source = "resources/changelog"

# The changelog file compiled entries are inserted into.
destination = "CHANGELOG.md"

# Files whose version strings are rewritten on ship. Each value is one
# template or a list of templates; <version> marks where the version
# appears, and the surrounding text is required literal context.
# [bump]
# "README.md" = "badge/version-<version>-blue"
"#;

pub fn run() -> Result<()> {
    let project_root = env::current_dir()?;
    init_at(&project_root)
}

pub fn init_at(project_root: &Path) -> Result<()> {
    let config_path = project_root.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    std::fs::write(&config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let config = Config::load(project_root)?;
    std::fs::create_dir_all(&config.source)
        .with_context(|| format!("Failed to create {}", config.source.display()))?;

    println!(
        "{} Created {} and {}",
        "✔".green(),
        config_path.display().to_string().cyan(),
        config.source.display().to_string().cyan()
    );
    Ok(())
}
