//! Configuration validation
//!
//! Provides the validation trait and range helpers for configuration.

use super::error::{ConfigError, ConfigResult};
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use concolic_engine::config::Validatable;
///
/// fn start<C: Validatable>(config: C) -> Result<(), ConfigError> {
///     config.validate()?;  // Works with any Validatable config
///     Ok(())
/// }
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl<T: Validatable> Validatable for Option<T> {
    fn validate(&self) -> ConfigResult<()> {
        match self {
            Some(config) => config.validate(),
            None => Ok(()),
        }
    }
}

/// Range check producing [`ConfigError::Range`]
pub fn check_range<T>(
    field: &str,
    value: T,
    range: RangeInclusive<T>,
    hint: &str,
) -> ConfigResult<()>
where
    T: PartialOrd + Display + Copy,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::range_with_hint(
            field,
            value,
            *range.start(),
            *range.end(),
            hint,
        ))
    }
}
