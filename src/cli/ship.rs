//! `shiplog ship` - compile pending entries and bump version strings

use crate::config::Config;
use crate::error::ShiplogError;
use crate::Result;
use crate::{bump, changelog, manifest, models, render, sources};
use colored::Colorize;
use std::env;
use std::path::Path;

pub fn run(version: &str, dry_run: bool, debug: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = Config::load(&project_root)?;
    run_at(&project_root, &config, version, dry_run, debug)
}

/// Internal implementation that accepts project_root for testability.
pub fn run_at(
    project_root: &Path,
    config: &Config,
    version: &str,
    dry_run: bool,
    debug: bool,
) -> Result<()> {
    let current_version = manifest::current_version(project_root)?;
    if current_version == version {
        return Err(ShiplogError::VersionUnchanged(version.to_string()).into());
    }

    let action = if dry_run { "Pretending to bump" } else { "Bumping" };
    println!(
        "🚢 {} {} → {}\n",
        action,
        current_version.blue(),
        version.green().bold()
    );

    // Compile pending entries into Markdown
    let entries = sources::load(&config.source)?;
    let changes = models::merge(entries);
    if debug {
        println!("{}\n{:#?}\n", "Changes:".bright_black(), changes);
    }

    let fragment = render::render(&changes, version);
    if debug {
        println!("{}\n\n{}", "Generated Markdown:".bright_black(), fragment);
    }

    // Write to the changelog, then drop the consumed entries. Sources are
    // only cleared after a successful, non-empty write.
    if fragment.is_empty() {
        println!("{}", "No pending changelog entries; nothing to publish.".yellow());
    } else {
        if !dry_run {
            let bytes_written = changelog::write(&fragment, version, &config.destination)?;
            if debug {
                println!(
                    "Wrote {} bytes to {}",
                    bytes_written,
                    config.destination.display()
                );
            }
            if bytes_written > 0 {
                let cleared = sources::clear(&config.source)?;
                if debug {
                    println!("Cleared {} source file(s)", cleared.len());
                }
            }
        }
        println!(
            "{} Updated {}",
            "✔".green(),
            config.destination.display().to_string().cyan()
        );
    }

    // Bump the package manifest itself
    manifest::bump(project_root, &current_version, version, dry_run)?;
    println!("{} Bumped {}", "✔".green(), manifest::MANIFEST_FILE.cyan());

    // Run configured version bump replacements. One failing target must not
    // keep the others from being processed, but any failure fails the run.
    let mut failures = 0;
    for (path, templates) in &config.bump {
        match bump::apply(path, templates, &current_version, version, dry_run) {
            Ok(count) => {
                println!(
                    "{} Bumped {} version string{} in {}",
                    "✔".green(),
                    count,
                    if count == 1 { "" } else { "s" },
                    path.display().to_string().cyan()
                );
            }
            Err(err) => {
                failures += 1;
                eprintln!("{} {}: {:#}", "✘".red(), path.display(), err);
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{} bump target(s) failed", failures);
    }

    Ok(())
}
