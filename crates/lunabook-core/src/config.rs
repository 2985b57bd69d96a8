//! Configuration loading and typed config structures for the guestbook.
//!
//! The configuration lives in a small YAML file. This module defines
//! strongly-typed structs that mirror the YAML structure and provides a
//! loader that reads and validates the file. Every field has a default
//! matching the original deployment (an 8-unit placement sphere with a
//! 2.5-unit minimum label distance).

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level guestbook configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GuestbookConfig {
    /// Placement geometry (sphere radius, spacing, retry budget).
    #[serde(default)]
    pub placement: PlacementConfig,

    /// Storage slot location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// First-run seeding behavior.
    #[serde(default)]
    pub seeding: SeedingConfig,
}

impl GuestbookConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Placement geometry configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlacementConfig {
    /// Radius of the enclosing sphere messages float inside.
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Minimum pairwise distance between message labels (best effort).
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,

    /// Rejection-sampling retry budget before accepting a too-close
    /// position.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            min_distance: default_min_distance(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Storage slot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON slot file holding the message list.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// First-run seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedingConfig {
    /// Whether an empty guestbook is populated with sample messages on
    /// startup.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

const fn default_radius() -> f64 {
    8.0
}

const fn default_min_distance() -> f64 {
    2.5
}

const fn default_max_attempts() -> u32 {
    crate::sampler::DEFAULT_MAX_ATTEMPTS
}

fn default_storage_path() -> String {
    String::from("lunabook-messages.json")
}

const fn default_true() -> bool {
    true
}
