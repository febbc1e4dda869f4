//! Concolic Execution Engine
//!
//! Symbolic-state engine of a concolic test generator: every value derived
//! from a symbolic input carries a solver term next to its concrete value,
//! every branch on such a value is logged, and after the run the log is
//! replayed with one branch negated at a time to produce new inputs.
//!
//! ## Architecture
//!
//! ```text
//! concolic
//! ├── domain/           # Values, path condition, inputs, reports
//! ├── ports/            # CoverageTracker
//! └── infrastructure/   # SymbolicState + operations, generational search
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use concolic_engine::config::EngineConfig;
//! use concolic_engine::features::concolic::{BinaryOp, ConcolicValue, InputMap, SymbolicState};
//!
//! let mut state = SymbolicState::new(InputMap::new(), EngineConfig::default())?;
//! let x = state.create_symbolic_value("x", 2.0.into());
//! let ten = ConcolicValue::concrete(10.0);
//!
//! // if (x < 10)
//! let cond = state.symbolic_binary(BinaryOp::Lt, &x, &ten);
//! state.symbolic_conditional(&ConcolicValue::with_term(true, cond));
//!
//! for alt in state.alternatives()? {
//!     println!("{:?} via {}", alt.input, alt.pc);
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{
    Alternative, ArraySymbol, BinaryOp, BranchId, ConcolicValue, ConcreteKind, ConcreteValue,
    GenerationReport, InputMap, PathConditionEntry, SearchStats, Symbolic, UnaryOp,
};
pub use infrastructure::SymbolicState;
pub use ports::{CoverageTracker, NoCoverage, SharedCoverage};
