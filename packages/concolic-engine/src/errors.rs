//! Error types for concolic-engine
//!
//! Unmodeled operations are not errors: builders return `None` and the
//! caller keeps executing concretely. Only the cases below abort.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for engine operations
#[derive(Debug, Error)]
pub enum ConcolicError {
    /// Replayed run did not reproduce the explored prefix
    #[error("Replay diverged: bound {bound} exceeds path condition length {path_len}")]
    Diverged { bound: usize, path_len: usize },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, ConcolicError>;
