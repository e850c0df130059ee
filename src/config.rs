//! Configuration management for maiku.
//!
//! Supports layered configuration: defaults → user → env
//!
//! Only ambient concerns (logging) are configurable. Layout, content,
//! key bindings and styling are fixed.

use crate::error::ConfigError;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub log: LogConfig,
}

impl ViewerConfig {
    /// Load configuration with hierarchy: defaults → user → env
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults_builder();

        // User config (~/.config/maiku/config.toml)
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // Environment variables (MAIKU_LOG__LEVEL, ...)
        builder = builder.add_source(
            Environment::with_prefix("MAIKU")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Load the defaults overlaid with a single TOML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Self::defaults_builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        Self::finish(builder)
    }

    /// Location of the per-user configuration file, if a home directory exists
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "maiku", "maiku")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn defaults_builder() -> ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(
            File::from_str(include_str!("../default_config.toml"), FileFormat::Toml)
                .required(false),
        )
    }

    fn finish(builder: ConfigBuilder<config::builder::DefaultState>) -> Result<Self, ConfigError> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Append log output to this file instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
