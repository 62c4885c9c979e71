use crate::defaults;
use crate::error::{Result, WavscribeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub stt: SttConfig,
}

/// Speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    /// Model location used when no model is given on the command line.
    pub model_path: Option<PathBuf>,
    /// Sample rate handed to the recognizer.
    pub sample_rate: u32,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            sample_rate: defaults::SAMPLE_RATE,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file is unreadable or contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| WavscribeError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;
        let config: Config = toml::from_str(&contents).map_err(|e| WavscribeError::Config {
            message: format!("{}: {}", path.display(), e),
        })?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only falls back to defaults when the file is missing; invalid TOML is
    /// still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - WAVSCRIBE_MODEL → stt.model_path
    /// - WAVSCRIBE_SAMPLE_RATE → stt.sample_rate
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("WAVSCRIBE_MODEL")
            && !model.is_empty()
        {
            self.stt.model_path = Some(PathBuf::from(model));
        }

        if let Ok(rate) = std::env::var("WAVSCRIBE_SAMPLE_RATE")
            && let Ok(rate) = rate.parse::<u32>()
        {
            self.stt.sample_rate = rate;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/wavscribe/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wavscribe")
            .join("config.toml")
    }
}
