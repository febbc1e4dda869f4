//! Concolic Ports - Interface Layer
//!
//! The engine's only inbound collaborator besides the solver is the
//! coverage tracker, which tags every path-condition entry with the branch
//! the interpreter executed last.

pub mod coverage;

pub use coverage::{CoverageTracker, NoCoverage, SharedCoverage};
