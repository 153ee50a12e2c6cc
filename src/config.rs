//! Runtime configuration loaded from shiplog.toml

use crate::bump::PLACEHOLDER;
use crate::error::ShiplogError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "shiplog.toml";

fn default_source() -> PathBuf {
    PathBuf::from("resources/changelog")
}

fn default_destination() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

/// Bump templates for one file, as written in the config: a single template
/// or a list of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BumpTemplates {
    One(String),
    Many(Vec<String>),
}

impl BumpTemplates {
    fn into_vec(self) -> Vec<String> {
        match self {
            BumpTemplates::One(template) => vec![template],
            BumpTemplates::Many(templates) => templates,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_source")]
    source: PathBuf,
    #[serde(default = "default_destination")]
    destination: PathBuf,
    #[serde(default)]
    bump: BTreeMap<PathBuf, BumpTemplates>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: default_destination(),
            bump: BTreeMap::new(),
        }
    }
}

/// Resolved runtime configuration.
///
/// Paths are anchored at the project root; bump values are normalized to
/// template lists and validated before any file I/O happens.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bump: BTreeMap<PathBuf, Vec<String>>,
}

impl Config {
    /// Load `shiplog.toml` from the project root, falling back to defaults
    /// when the file does not exist.
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        let raw = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            toml::from_str(&content)
                .map_err(|err| ShiplogError::InvalidConfig(err.to_string()))?
        } else {
            RawConfig::default()
        };

        let mut bump = BTreeMap::new();
        for (path, templates) in raw.bump {
            let templates = templates.into_vec();
            for template in &templates {
                if !template.contains(PLACEHOLDER) {
                    return Err(ShiplogError::MissingPlaceholder(template.clone()).into());
                }
            }
            bump.insert(project_root.join(path), templates);
        }

        Ok(Config {
            source: project_root.join(raw.source),
            destination: project_root.join(raw.destination),
            bump,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();

        assert_eq!(config.source, temp_dir.path().join("resources/changelog"));
        assert_eq!(config.destination, temp_dir.path().join("CHANGELOG.md"));
        assert!(config.bump.is_empty());
    }

    #[test]
    fn test_load_overrides_and_normalizes_bump_values() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            r#"
source = "changes"
destination = "HISTORY.md"

[bump]
"README.md" = "badge/version-<version>-blue"
"docs/install.md" = ["shiplog@<version>", "v<version>"]
"#,
        )
        .unwrap();

        let config = Config::load(temp_dir.path()).unwrap();

        assert_eq!(config.source, temp_dir.path().join("changes"));
        assert_eq!(config.destination, temp_dir.path().join("HISTORY.md"));
        assert_eq!(
            config.bump.get(&temp_dir.path().join("README.md")).unwrap(),
            &vec!["badge/version-<version>-blue".to_string()]
        );
        assert_eq!(
            config
                .bump
                .get(&temp_dir.path().join("docs/install.md"))
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_template_without_placeholder_is_rejected_at_load() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[bump]\n\"README.md\" = \"no placeholder\"\n",
        )
        .unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShiplogError>(),
            Some(ShiplogError::MissingPlaceholder(_))
        ));
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "source = [not toml").unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShiplogError>(),
            Some(ShiplogError::InvalidConfig(_))
        ));
    }
}
