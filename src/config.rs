//! Configuration file handling for i2a.
//!
//! Loads defaults from `~/.config/i2a/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{CharSet, DEFAULT_WIDTH_MULTIPLIER};

/// Default blur passed to the resize step.
pub const DEFAULT_BLUR: f64 = 0.01;

/// Configuration file structure for i2a.
/// Loaded from ~/.config/i2a/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    #[serde(default = "default_blur")]
    pub blur: f64,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub optimize: bool,
    #[serde(default)]
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_WIDTH_MULTIPLIER,
            blur: DEFAULT_BLUR,
            invert: false,
            optimize: false,
            charset: CharSet::default(),
        }
    }
}

/// Sampling bounds. `0` means unbounded.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct LimitsConfig {
    #[serde(default)]
    pub max_width: u32,
    #[serde(default)]
    pub max_height: u32,
}

fn default_multiplier() -> f64 {
    DEFAULT_WIDTH_MULTIPLIER
}

fn default_blur() -> f64 {
    DEFAULT_BLUR
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed or holds invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| e.with_path(&path))?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.render.multiplier.is_finite() && self.render.multiplier > 0.0) {
            return Err(ConfigError::Invalid {
                path: PathBuf::new(),
                message: format!("multiplier must be positive, got {}", self.render.multiplier),
            });
        }
        if !(self.render.blur.is_finite() && self.render.blur > 0.0) {
            return Err(ConfigError::Invalid {
                path: PathBuf::new(),
                message: format!("blur must be positive, got {}", self.render.blur),
            });
        }
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config file '{}': {message}", .path.display())]
    Invalid { path: PathBuf, message: String },
}

impl ConfigError {
    fn with_path(self, p: &Path) -> Self {
        match self {
            ConfigError::Io { source, .. } => ConfigError::Io {
                path: p.to_path_buf(),
                source,
            },
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: p.to_path_buf(),
                source,
            },
            ConfigError::Invalid { message, .. } => ConfigError::Invalid {
                path: p.to_path_buf(),
                message,
            },
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("i2a").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/i2a/config.toml")
        })
}
