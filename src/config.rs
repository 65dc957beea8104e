//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! grid-config.toml file. It covers the few knobs that vary between
//! deployments: where extra fonts live, which font family is preferred, and
//! the default output path for file delivery.
//!
//! The canvas dimensions are deliberately *not* configurable: 1024x250 is a
//! hard external contract with downstream consumers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration loaded from grid-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Font loading and selection
    pub fonts: FontConfig,
    /// Output delivery defaults
    pub output: OutputConfig,
}

/// Font loading and selection configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct FontConfig {
    /// Preferred font family; silently degraded through the fallback chain
    /// when unavailable on the host
    pub preferred_family: String,
    /// Optional directory of extra font files to load alongside system fonts
    pub extra_dir: Option<PathBuf>,
}

/// Output delivery configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default file path when the caller does not supply one
    pub default_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fonts: FontConfig {
                preferred_family: "SF Pro Text".to_string(),
                extra_dir: None,
            },
            output: OutputConfig {
                default_path: "grid_availability.png".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from grid-config.toml.
    /// Falls back to default configuration if the file doesn't exist or is invalid.
    pub fn load() -> Self {
        Self::load_from_path("grid-config.toml")
    }

    /// Load configuration from the specified path.
    /// Falls back to default configuration if the file doesn't exist or is invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("invalid config file format: {}; using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("no config file found, using defaults");
                Self::default()
            }
        }
    }
}
