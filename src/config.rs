//! Configuration management for pr-title-fix
//!
//! Settings are read from `~/.config/pr-title-fix/config.yml`:
//!
//! ```yaml
//! prefixes:
//!   - FOO
//!   - BAR
//! ```
//!
//! Prefixes passed on the command line (or via `ISSUE_PREFIXES`) win over the
//! file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::prefixes;

/// The name of the package, used for config directory naming
const PKG_NAME: &str = "pr-title-fix";

/// Name of the configuration file inside the config directory
const CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Known issue key prefixes (e.g. project codes)
    pub prefixes: Vec<String>,
}

impl Config {
    /// Load the configuration from `path`
    ///
    /// A missing file is not an error and yields the default configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse the configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Config = serde_yaml::from_str(contents)?;
        config.prefixes = prefixes::normalize(&config.prefixes);
        Ok(config)
    }

    /// Pick the prefixes to use, preferring an explicit comma separated list
    pub fn resolve_prefixes(&self, explicit: Option<&str>) -> Vec<String> {
        match explicit {
            Some(list) => prefixes::parse(list),
            None => self.prefixes.clone(),
        }
    }
}

/// Get the configuration directory path
///
/// Returns the path to `~/.config/pr-title-fix/`.
pub fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| Error::EnvVar("HOME".to_string()))?;
    Ok(PathBuf::from(home).join(".config").join(PKG_NAME))
}

/// Get the path to the default config file
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}
