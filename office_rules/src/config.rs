//! Runtime configuration, read from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine-level knobs for the office runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Draw the diagnostic overlay on top of the HUD.
    pub debug_mode: bool,
    /// Multiplier from definition coordinates to screen pixels `[x, y]`.
    pub screen_scale: [f32; 2],
    /// HUD font used when the office definition names none.
    pub default_font: String,
    /// Toxicity units gained or shed per second.
    pub toxic_rate: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            screen_scale: [1.0, 1.0],
            default_font: "LCD Solid".to_string(),
            toxic_rate: 50.0,
        }
    }
}

impl RuntimeConfig {
    /// Parse configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), debug_mode = config.debug_mode, "loaded runtime config");
        Ok(config)
    }
}
