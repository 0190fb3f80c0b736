//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - The `--config` flag or `SBB_CONFIG` environment variable

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty)
    pub format: String,

    /// Use colored error output by default
    pub color: bool,

    /// Terminate human-readable output with a newline
    pub trailing_newline: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, full, json)
    pub format: String,

    /// Include thread IDs
    pub thread_ids: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
            trailing_newline: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            thread_ids: false,
        }
    }
}

/// Serialization format of a config or recipe file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("yaml") | Some("yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }

    /// Deserialize `content` in this format
    pub fn parse<T: serde::de::DeserializeOwned>(self, content: &str) -> Result<T> {
        Ok(match self {
            Self::Toml => toml::from_str(content)?,
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        })
    }
}

/// Read and deserialize a TOML, YAML or JSON file
pub fn read_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = FileFormat::from_path(path).ok_or_else(|| Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: "TOML, YAML or JSON".to_string(),
    })?;

    let content = std::fs::read_to_string(path)?;
    format.parse(&content)
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        read_file(path)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_first(&Self::default_config_paths())
    }

    /// Load the first existing file in `paths`
    ///
    /// Runs before logging is set up, so a file that exists but fails to
    /// parse is an error rather than a skipped candidate.
    fn load_first(paths: &[PathBuf]) -> Result<Self> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => Self::from_file(path).map_err(|e| {
                Error::config(format!("failed to load {}: {}", path.display(), e))
            }),
            // Return default config if no config file found
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".sbb.toml"), PathBuf::from("sbb.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sbb").join("config.toml"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".sbb.toml"));
        }

        paths
    }

    /// Check that string-typed settings hold known values
    pub fn validate(&self) -> Result<()> {
        use clap::ValueEnum;

        if crate::cli::OutputFormat::from_str(&self.output.format, true).is_err() {
            return Err(Error::config(format!(
                "unknown output format '{}'",
                self.output.format
            )));
        }

        if !matches!(self.logging.format.as_str(), "compact" | "full" | "json") {
            return Err(Error::config(format!(
                "unknown log format '{}'",
                self.logging.format
            )));
        }

        Ok(())
    }
}
