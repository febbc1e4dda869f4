/*
 * Concolic Engine - Symbolic state for concolic test generation
 *
 * Feature-First Hexagonal Architecture:
 * - config/      : Engine configuration (presets, validation, YAML)
 * - features/    : Vertical slices (smt → concolic)
 * - errors       : Crate error type
 *
 * Solver:
 * - Z3 through the `z3` crate, z3-sys for the few builders it lacks
 * - One context and one incremental session per run
 */

// Crate-level lint configuration
#![allow(clippy::new_without_default)] // Engines need a config, Default would hide it
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::len_without_is_empty)] // Length accessors on handles

pub mod config;
pub mod errors;
pub mod features;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, EngineConfig, Preset};
pub use errors::{ConcolicError, Result};
pub use features::concolic::{
    Alternative, BinaryOp, BranchId, ConcolicValue, ConcreteValue, CoverageTracker,
    GenerationReport, InputMap, SearchStats, SharedCoverage, SymbolicState, UnaryOp,
};
pub use features::smt::{Term, TermSort};
