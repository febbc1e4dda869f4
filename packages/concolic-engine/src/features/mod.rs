//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure data models
//! - ports/      - Interface definitions (traits)
//! - infrastructure/ - External dependency implementations

// SMT layer: sorts, Z3 terms and sessions
pub mod smt;

// Symbolic-state engine and generational search
pub mod concolic;
