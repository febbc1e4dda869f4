//! SMT Domain Models
//!
//! Solver-independent description of the terms the engine builds.

pub mod sort;

pub use sort::TermSort;
