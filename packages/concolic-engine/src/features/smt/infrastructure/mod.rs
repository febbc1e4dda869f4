//! SMT Infrastructure
//!
//! Solver backends behind the [`ConstraintSolver`] seam.
//!
//! # Modules
//!
//! - `solvers::z3_backend` - Z3 context and sort-checked term builders
//! - `solvers::z3_solver` - Incremental Z3 session with per-query timeout

pub mod solvers;

pub use solvers::{
    Checks, ConstraintSolver, ModelEval, SolverResult, Term, Z3Context, Z3Model, Z3Solver,
};
