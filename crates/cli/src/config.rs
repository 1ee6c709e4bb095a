//! Configuration loading
//!
//! Settings come from the first file found among:
//! 1. `--config <path>` (must exist)
//! 2. `./ft.toml`
//! 3. `<config dir>/filetrack/config.toml`
//!
//! falling back to defaults, then command line flags are applied on top.

use anyhow::{Context, Result};
use ft_core::TrackedFile;
use ft_journal::Persistence;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "ft.toml";

/// Filetrack settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File whose history is tracked
    pub tracked_file: PathBuf,
    /// Database file holding the history
    pub database: PathBuf,
    /// Keep history between runs (false = history is discarded on exit)
    pub persist: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracked_file: PathBuf::from("file.txt"),
            database: PathBuf::from("versions.db"),
            persist: true,
        }
    }
}

/// Command line overrides applied after the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tracked_file: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub ephemeral: bool,
}

/// A resolved configuration and the file it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

impl Config {
    /// Check that paths are usable
    pub fn validate(&self) -> Result<()> {
        if self.tracked_file.as_os_str().is_empty() {
            anyhow::bail!("tracked_file must not be empty");
        }
        if self.persist {
            if self.database.as_os_str().is_empty() {
                anyhow::bail!("database must not be empty when persist = true");
            }
            if self.database == self.tracked_file {
                anyhow::bail!(
                    "database and tracked_file must differ (both are {})",
                    self.database.display()
                );
            }
        }
        Ok(())
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(path) = &overrides.tracked_file {
            self.tracked_file = path.clone();
        }
        if let Some(path) = &overrides.database {
            self.database = path.clone();
        }
        if overrides.ephemeral {
            self.persist = false;
        }
        self
    }

    pub fn tracked(&self) -> TrackedFile {
        TrackedFile::new(&self.tracked_file)
    }

    pub fn persistence(&self) -> Persistence {
        if self.persist {
            Persistence::Database(self.database.clone())
        } else {
            Persistence::Ephemeral
        }
    }
}

/// Per-user config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("filetrack").join("config.toml"))
}

/// Resolve configuration, preferring `explicit` when given
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        let config = load_from(path)?;
        return Ok(LoadedConfig {
            config,
            source: Some(path.to_path_buf()),
        });
    }

    let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)).chain(user_config_path());
    for path in candidates {
        if path.is_file() {
            let config = load_from(&path)?;
            return Ok(LoadedConfig {
                config,
                source: Some(path),
            });
        }
    }

    tracing::debug!("No config file found, using defaults");
    Ok(LoadedConfig {
        config: Config::default(),
        source: None,
    })
}

/// Parse a config file
pub fn load_from(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Example config file contents
pub fn example_config() -> &'static str {
    r#"# Filetrack configuration (ft.toml)

# File whose history is tracked
tracked_file = "file.txt"

# Binary database holding every version
database = "versions.db"

# Set to false to discard history when ft exits
persist = true
"#
}
