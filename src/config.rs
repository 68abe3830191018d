//! Configuration module for sortr
//!
//! The persisted configuration carries the watch directory, the ignore
//! sentinel, ignored names and the full directory -> tags mapping. It lives
//! as a JSON file in the user's config directory and is the registry's only
//! durable form: loaded into a [`Registry`] at startup, exported back at
//! shutdown.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::Registry;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading/writing the config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No config file at the expected location
    #[error("No config file exists at {0}. Run 'sortr init' to create one")]
    NotFound(PathBuf),

    /// The ignore sentinel must be a single character
    #[error("The ignore character must be exactly one character long, got '{0}'")]
    InvalidIgnoreChar(String),

    /// The system config directory could not be determined
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Type alias for cleaner function signatures
pub type Result<T> = std::result::Result<T, ConfigError>;

/// One directory's persisted record: just its tags (the path is the map key)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Tags owned by the directory
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// Application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SorterConfig {
    /// Directory watched for arriving files
    pub watch_dir: PathBuf,

    /// Sentinel character: a path containing it is never moved
    pub ignore_char: String,

    /// Filenames containing any of these substrings are never moved
    #[serde(default)]
    pub ignored_names: Vec<String>,

    /// All managed directories, keyed by absolute path
    #[serde(default)]
    pub directories: BTreeMap<PathBuf, DirectoryEntry>,
}

impl SorterConfig {
    /// Build a fresh configuration with no directories yet.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidIgnoreChar`] if `ignore_char` is not
    /// exactly one character.
    pub fn new(
        watch_dir: PathBuf,
        ignore_char: &str,
        ignored_names: Vec<String>,
    ) -> Result<Self> {
        let config = Self {
            watch_dir,
            ignore_char: ignore_char.to_string(),
            ignored_names,
            directories: BTreeMap::new(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Get the path to the config file
    ///
    /// # Errors
    /// Returns [`ConfigError::NoConfigDir`] if the system config directory
    /// cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("sortr").join("config.json"))
    }

    /// Get the path to the movement log, kept next to the config file
    ///
    /// # Errors
    /// Returns [`ConfigError::NoConfigDir`] if the system config directory
    /// cannot be determined.
    pub fn log_path() -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        Ok(config_path.with_file_name(crate::movelog::LOG_FILENAME))
    }

    /// Load the configuration from the default location.
    ///
    /// A missing file is fatal: an empty watch directory is not a runnable
    /// state, so there is no silent default. `sortr init` creates the file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file is missing, unreadable or invalid.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from an explicit path
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file is missing, unreadable or invalid.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.clone()));
        }

        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to the default location
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the config directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to an explicit path
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the config directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json_string = serde_json::to_string_pretty(self)?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// The ignore sentinel as a `char`.
    ///
    /// Never fails on a validated configuration; `ignore_char` is checked to
    /// be exactly one character at construction, load and save.
    #[must_use]
    pub fn ignore_char(&self) -> char {
        self.ignore_char.chars().next().unwrap_or('!')
    }

    /// Populate a fresh [`Registry`] from the persisted directory mapping
    #[must_use]
    pub fn build_registry(&self) -> Registry {
        Registry::from_entries(
            self.directories
                .iter()
                .map(|(path, entry)| (path.clone(), entry.tags.iter())),
        )
    }

    /// Export the current registry state back into the persisted shape,
    /// replacing the previous directory mapping
    pub fn capture_registry(&mut self, registry: &Registry) {
        self.directories = registry
            .entries()
            .into_iter()
            .map(|(path, tags)| (path, DirectoryEntry { tags }))
            .collect();
    }

    fn validate(&self) -> Result<()> {
        if self.ignore_char.chars().count() != 1 {
            return Err(ConfigError::InvalidIgnoreChar(self.ignore_char.clone()));
        }
        Ok(())
    }
}
