//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema types. Loading and export live on
//! [`EngineConfig`](super::EngineConfig).

use super::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Schema versions this crate can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Per-field overrides applied on top of the preset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver_timeout_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrays_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_array_model_len: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify_reports: Option<bool>,
}

impl ConfigOverrides {
    pub const FIELDS: &'static [&'static str] = &[
        "solver_timeout_ms",
        "arrays_enabled",
        "max_array_model_len",
        "simplify_reports",
    ];
}

/// Parse a v1 document, reporting structural problems with dedicated errors
/// before handing the rest to serde.
pub fn parse_export(content: &str) -> ConfigResult<ConfigExportV1> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)?;

    let version = raw.get("version").ok_or(ConfigError::MissingVersion)?;
    let found = version
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(u32::MAX);
    if !SUPPORTED_VERSIONS.contains(&found) {
        return Err(ConfigError::UnsupportedVersion {
            found,
            supported: SUPPORTED_VERSIONS.to_vec(),
        });
    }

    if let Some(overrides) = raw.get("overrides").and_then(|o| o.as_mapping()) {
        for key in overrides.keys() {
            let Some(key) = key.as_str() else { continue };
            if !ConfigOverrides::FIELDS.contains(&key) {
                return Err(ConfigError::unknown_field_with_suggestion(
                    key,
                    "overrides",
                    ConfigOverrides::FIELDS.iter().map(|f| f.to_string()).collect(),
                ));
            }
        }
    }

    Ok(serde_yaml::from_value(raw)?)
}
