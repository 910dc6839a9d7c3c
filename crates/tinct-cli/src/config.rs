//! User configuration, read from a YAML file.
//!
//! ```yaml
//! count: 6
//! strategy: triadic
//! share_url: https://colors.example.com/
//! store_dir: ~/palettes
//! ```
//!
//! Every field is optional. Without `--config`, the file is looked up at
//! `<config dir>/tinct/config.yaml` and silently skipped when absent.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use tinct::{Strategy, DEFAULT_COLORS};

/// Base of share links when none is configured.
pub const DEFAULT_SHARE_URL: &str = "https://tinct.local/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Palette size used when `--count` is not given.
    pub count: usize,
    /// Strategy used when `--strategy` is not given.
    pub strategy: Strategy,
    /// Base of exported share links.
    pub share_url: String,
    /// Directory holding saved palettes.
    pub store_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COLORS,
            strategy: Strategy::default(),
            share_url: DEFAULT_SHARE_URL.to_string(),
            store_dir: None,
        }
    }
}

impl Config {
    /// `<config dir>/tinct/config.yaml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tinct").join("config.yaml"))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document deserializes to unit, not to a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Loads `explicit` if given (it must exist), else the default path if it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let yaml = fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_yaml(&yaml)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Directory for saved palettes: configured, else `<data dir>/tinct`,
    /// else `.tinct` in the working directory.
    pub fn store_dir(&self) -> PathBuf {
        if let Some(dir) = &self.store_dir {
            return expand_home(dir);
        }
        dirs::data_dir()
            .map(|dir| dir.join("tinct"))
            .unwrap_or_else(|| PathBuf::from(".tinct"))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
