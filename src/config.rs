//! Spin configuration loaded from an optional YAML file.
//!
//! Every key is optional. Values from the command line override the file,
//! and anything left unset falls back to the built-in defaults.
//!
//! ```yaml
//! min_steps: 30
//! max_steps: 80
//! delay_ms: 50
//! window: 2
//! settle_secs: 300
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::spin::{
    DEFAULT_MAX_STEPS, DEFAULT_MIN_STEPS, DEFAULT_STEP_DELAY, DEFAULT_WINDOW_WIDTH, SpinOptions,
};

/// How long the final frame stays up when nothing else is configured.
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Fewest frames a spin renders
    #[serde(default)]
    pub min_steps: Option<usize>,

    /// Exclusive upper bound on frames rendered
    #[serde(default)]
    pub max_steps: Option<usize>,

    /// Milliseconds between frames
    #[serde(default)]
    pub delay_ms: Option<u64>,

    /// Entries shown before and after the current choice
    #[serde(default)]
    pub window: Option<usize>,

    /// Seconds the final frame stays on screen
    #[serde(default)]
    pub settle_secs: Option<u64>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the global config file is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match global_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = ?path, "config:loaded");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        // An empty YAML document deserializes to unit, not a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Layer `overrides` on top of this config; set fields in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            min_steps: overrides.min_steps.or(self.min_steps),
            max_steps: overrides.max_steps.or(self.max_steps),
            delay_ms: overrides.delay_ms.or(self.delay_ms),
            window: overrides.window.or(self.window),
            settle_secs: overrides.settle_secs.or(self.settle_secs),
        }
    }

    pub fn spin_options(&self) -> SpinOptions {
        SpinOptions {
            min_steps: self.min_steps.unwrap_or(DEFAULT_MIN_STEPS),
            max_steps: self.max_steps.unwrap_or(DEFAULT_MAX_STEPS),
            step_delay: self
                .delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_STEP_DELAY),
            window_width: self.window.unwrap_or(DEFAULT_WINDOW_WIDTH),
        }
    }

    pub fn settle(&self) -> Duration {
        self.settle_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SETTLE)
    }
}

/// Path to the global config file.
/// Prefers an existing .yml file, otherwise defaults to .yaml.
fn global_config_path() -> Option<PathBuf> {
    let home = home::home_dir()?;
    let yaml = home.join(".config/raffle/config.yaml");
    let yml = home.join(".config/raffle/config.yml");

    if yml.exists() && !yaml.exists() {
        Some(yml)
    } else {
        Some(yaml)
    }
}
