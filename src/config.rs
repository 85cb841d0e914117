//! Configuration file support for ferro-lvg.
//!
//! Engine defaults can be set in a `.ferro-lvg.toml` file and overridden
//! from the environment.
//!
//! # Example Configuration
//!
//! ```toml
//! [engine]
//! max-len = 100
//! noncoding-prefixes = ["NR", "XR"]
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro-lvg.toml` in current directory
//! 2. `~/.config/ferro/lvg.toml`
//!
//! Environment variables take precedence over config file settings:
//! `FERRO_LVG_MAX_LEN` and `FERRO_LVG_NONCODING_PREFIXES` (comma-separated).

use crate::error::LvgError;
use crate::lvg::LvgOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_LEN_VAR: &str = "FERRO_LVG_MAX_LEN";
pub const NONCODING_PREFIXES_VAR: &str = "FERRO_LVG_NONCODING_PREFIXES";

/// Parsed configuration from a .ferro-lvg.toml file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LvgConfig {
    /// Engine section.
    pub engine: EngineConfig,
}

/// Engine section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EngineConfig {
    /// Maximum canonical length of a translation result.
    pub max_len: Option<usize>,
    /// Accession prefixes treated as non-coding transcripts.
    pub noncoding_prefixes: Option<Vec<String>>,
}

impl LvgConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Option<Self> {
        let cwd_config = PathBuf::from(".ferro-lvg.toml");
        if cwd_config.exists() {
            match Self::load_from_path(&cwd_config) {
                Ok(config) => return Some(config),
                Err(e) => log::warn!("Ignoring {}: {}", cwd_config.display(), e),
            }
        }

        if let Some(home) = dirs_home() {
            let home_config = home.join(".config").join("ferro").join("lvg.toml");
            if home_config.exists() {
                match Self::load_from_path(&home_config) {
                    Ok(config) => return Some(config),
                    Err(e) => log::warn!("Ignoring {}: {}", home_config.display(), e),
                }
            }
        }

        None
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, LvgError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, LvgError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides read through `lookup`, normally the process environment.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, LvgError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(MAX_LEN_VAR) {
            let max_len = value.trim().parse::<usize>().map_err(|e| LvgError::Config {
                msg: format!("{}='{}': {}", MAX_LEN_VAR, value, e),
            })?;
            self.engine.max_len = Some(max_len);
        }
        if let Some(value) = lookup(NONCODING_PREFIXES_VAR) {
            self.engine.noncoding_prefixes = Some(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }
        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, LvgError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Engine options with this configuration's settings.
    pub fn to_options(&self) -> LvgOptions {
        let mut options = LvgOptions::default();
        if let Some(max_len) = self.engine.max_len {
            options = options.with_max_len(max_len);
        }
        if let Some(prefixes) = &self.engine.noncoding_prefixes {
            options = options.with_noncoding_prefixes(prefixes.iter().cloned());
        }
        options
    }
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
