//! Configuration loader - YAML file + .env / environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::machin::precision::GUARD_DIGITS;

/// Settings loaded from pi_record.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra digits carried past the requested precision
    pub guard_digits: u64,
    /// Directory the estimate files are written to
    pub output_dir: PathBuf,
    /// Rolling log files go here; console-only logging when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guard_digits: GUARD_DIGITS,
            output_dir: PathBuf::from("."),
            log_dir: None,
        }
    }
}

/// Values taken from .env or the process environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub guard_digits: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Environment values win over the file
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(guard) = overrides.guard_digits {
            self.guard_digits = guard;
        }
        if let Some(dir) = &overrides.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(dir) = &overrides.log_dir {
            self.log_dir = Some(dir.clone());
        }
        self
    }
}

impl Overrides {
    /// Load overrides from .env and the environment
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Overrides {
            guard_digits: lookup("PI_RECORD_GUARD_DIGITS").and_then(|s| s.trim().parse().ok()),
            output_dir: lookup("PI_RECORD_OUTPUT_DIR").map(PathBuf::from),
            log_dir: lookup("PI_RECORD_LOG_DIR").map(PathBuf::from),
        }
    }
}
