//! Preset configurations
//!
//! Presets provide complete engine configurations for common use cases.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// CI: quick generations
    ///
    /// - Solver timeout 5s per query
    /// - Array read-back capped at 256 elements
    Fast,

    /// Development default
    ///
    /// - Solver timeout 5 minutes per query
    /// - Array read-back capped at 1024 elements
    #[default]
    Balanced,

    /// Long-running exploration
    ///
    /// - Solver timeout 10 minutes per query
    /// - Array read-back capped at 65536 elements
    Thorough,
}

impl Preset {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Thorough => "thorough",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "thorough" => Ok(Self::Thorough),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
