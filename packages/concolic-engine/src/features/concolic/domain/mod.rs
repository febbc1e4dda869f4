//! Concolic Domain Models
//!
//! Solver-facing data owned by one run: dual values, path-condition
//! entries, input maps and search reports.

pub mod input;
pub mod operators;
pub mod path_condition;
pub mod values;

pub use input::{Alternative, GenerationReport, InputMap, SearchStats};
pub use operators::{BinaryOp, UnaryOp, UnknownOperator};
pub use path_condition::{BranchId, PathConditionEntry};
pub use values::{ArraySymbol, ConcolicValue, ConcreteKind, ConcreteValue, Symbolic};
