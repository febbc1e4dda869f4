//! Engine configuration
//!
//! ```rust,ignore
//! use concolic_engine::config::{EngineConfig, Preset};
//!
//! // Preset
//! let config = EngineConfig::preset(Preset::Fast);
//!
//! // Preset + overrides
//! let config = EngineConfig::preset(Preset::Balanced)
//!     .solver_timeout_ms(60_000)
//!     .arrays_enabled(false);
//!
//! // YAML
//! let config = EngineConfig::from_yaml("concolic.yaml")?;
//! ```

use super::error::ConfigResult;
use super::io::{parse_export, ConfigExportV1, ConfigOverrides};
use super::preset::Preset;
use super::validation::{check_range, Validatable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of one symbolic-state engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Per-query solver timeout; a timed out query counts as unsatisfiable
    pub solver_timeout_ms: u64,

    /// Model homogeneous arrays as array-sort symbols (otherwise opaque)
    pub arrays_enabled: bool,

    /// Cap on elements read back from a model for one array input
    pub max_array_model_len: usize,

    /// Simplify conditions before rendering them in reports
    pub simplify_reports: bool,
}

impl EngineConfig {
    pub const TIMEOUT_RANGE: std::ops::RangeInclusive<u64> = 1..=3_600_000;
    pub const ARRAY_MODEL_RANGE: std::ops::RangeInclusive<usize> = 0..=1_048_576;

    /// Complete configuration for a preset
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                solver_timeout_ms: 5_000,
                arrays_enabled: true,
                max_array_model_len: 256,
                simplify_reports: true,
            },
            Preset::Balanced => Self {
                solver_timeout_ms: 300_000,
                arrays_enabled: true,
                max_array_model_len: 1024,
                simplify_reports: true,
            },
            Preset::Thorough => Self {
                solver_timeout_ms: 600_000,
                arrays_enabled: true,
                max_array_model_len: 65_536,
                simplify_reports: true,
            },
        }
    }

    pub fn solver_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.solver_timeout_ms = timeout_ms;
        self
    }

    pub fn arrays_enabled(mut self, enabled: bool) -> Self {
        self.arrays_enabled = enabled;
        self
    }

    pub fn max_array_model_len(mut self, len: usize) -> Self {
        self.max_array_model_len = len;
        self
    }

    pub fn simplify_reports(mut self, enabled: bool) -> Self {
        self.simplify_reports = enabled;
        self
    }

    fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(timeout) = overrides.solver_timeout_ms {
            self.solver_timeout_ms = timeout;
        }
        if let Some(enabled) = overrides.arrays_enabled {
            self.arrays_enabled = enabled;
        }
        if let Some(len) = overrides.max_array_model_len {
            self.max_array_model_len = len;
        }
        if let Some(enabled) = overrides.simplify_reports {
            self.simplify_reports = enabled;
        }
        self
    }

    /// Load from YAML file (v1 schema), validated
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), ?config, "loaded engine configuration");
        Ok(config)
    }

    /// Parse a YAML document (v1 schema), validated
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export = parse_export(content)?;
        let preset: Preset = export.preset.parse()?;

        let config = Self::preset(preset).apply(export.overrides.unwrap_or_default());
        config.validate()?;
        Ok(config)
    }

    /// Export as a v1 document; only fields differing from `base` are written
    pub fn to_yaml(&self, base: Preset) -> ConfigResult<String> {
        let defaults = Self::preset(base);
        let overrides = ConfigOverrides {
            solver_timeout_ms: (self.solver_timeout_ms != defaults.solver_timeout_ms)
                .then_some(self.solver_timeout_ms),
            arrays_enabled: (self.arrays_enabled != defaults.arrays_enabled)
                .then_some(self.arrays_enabled),
            max_array_model_len: (self.max_array_model_len != defaults.max_array_model_len)
                .then_some(self.max_array_model_len),
            simplify_reports: (self.simplify_reports != defaults.simplify_reports)
                .then_some(self.simplify_reports),
        };
        let export = ConfigExportV1 {
            version: 1,
            preset: base.to_string(),
            overrides: (overrides != ConfigOverrides::default()).then_some(overrides),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::preset(Preset::Balanced)
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range(
            "solver_timeout_ms",
            self.solver_timeout_ms,
            Self::TIMEOUT_RANGE,
            "Each satisfiability query needs a timeout between 1ms and one hour",
        )?;
        check_range(
            "max_array_model_len",
            self.max_array_model_len,
            Self::ARRAY_MODEL_RANGE,
            "Array read-back is capped at 1M elements",
        )
    }

    fn config_name(&self) -> &'static str {
        "EngineConfig"
    }
}
