//! Engine Configuration
//!
//! Two-tier configuration:
//! - Level 1: Preset - one-liner
//! - Level 2: Overrides - builder methods or a versioned YAML file
//!
//! # Examples
//!
//! ```rust,ignore
//! use concolic_engine::config::{EngineConfig, Preset};
//!
//! let config = EngineConfig::preset(Preset::Fast);
//!
//! let config = EngineConfig::preset(Preset::Balanced).solver_timeout_ms(30_000);
//!
//! let config = EngineConfig::from_yaml("concolic.yaml")?;
//! ```

pub mod engine_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

// Re-exports
pub use engine_config::EngineConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use validation::Validatable;
