//! Optional config file, in TOML or YAML.

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::duration::parse_duration;

/// File names looked up in `$HOME` when no `--config` is given.
pub const DEFAULT_CONFIG_NAMES: [&str; 3] =
    [".sqlite3perf.toml", ".sqlite3perf.yaml", ".sqlite3perf.yml"];

/// Contents of a config file. Every key is optional.
///
/// ```toml
/// db = "/var/tmp/perf.db"
///
/// [generate]
/// records = 1000000
/// interval = "5s"
/// vacuum = true
///
/// [bench]
/// interval = 1
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub db: Option<PathBuf>,
    pub generate: GenerateSection,
    pub bench: BenchSection,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateSection {
    pub records: Option<u64>,
    pub interval: Option<IntervalSetting>,
    pub vacuum: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchSection {
    pub interval: Option<IntervalSetting>,
}

/// An interval written either as whole seconds or as a duration string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IntervalSetting {
    Seconds(u64),
    Text(String),
}

impl IntervalSetting {
    pub fn to_duration(&self) -> anyhow::Result<Duration> {
        match self {
            IntervalSetting::Seconds(secs) => parse_duration(&secs.to_string()),
            IntervalSetting::Text(text) => parse_duration(text),
        }
    }
}

impl ConfigFile {
    /// Read and parse `path`, picking the format from its extension.
    ///
    /// Files without an extension are read as TOML.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
            Some("toml") | None => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display())),
            Some(other) => anyhow::bail!(
                "Unsupported config file extension '{other}' for {} (expected .toml, .yaml or .yml)",
                path.display()
            ),
        }
    }
}

/// Load the explicit config file, or the first default one found in `home`.
///
/// Returns an empty config when neither exists.
pub fn load_config(explicit: Option<&Path>, home: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => home.and_then(find_default_config),
    };

    match path {
        Some(path) => {
            let config = ConfigFile::from_path(&path)?;
            tracing::info!("Using config file: {}", path.display());
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn find_default_config(home: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| home.join(name))
        .find(|path| path.is_file())
}
