// src/config/mod.rs
//! Configuration: storage root, default locations, and the external opener.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::fs::LocationSpec;

/// User settings, read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root that default locations are resolved against
    pub storage_root: Option<PathBuf>,
    /// Shown, in this order before sorting, when no path is given
    pub default_locations: Vec<LocationSpec>,
    pub opener: OpenerConfig,
}

/// Command used to open files externally; the URI is appended as the last
/// argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenerConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for OpenerConfig {
    fn default() -> Self {
        let (command, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(windows) {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        };
        Self {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize burrow config")
    }

    /// `$XDG_CONFIG_HOME/burrow/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("burrow").join("config.toml"))
    }

    /// Load an explicitly named file, or the default file when it exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Configured root, else the home directory, else the working directory.
    pub fn storage_root(&self) -> PathBuf {
        self.storage_root
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
