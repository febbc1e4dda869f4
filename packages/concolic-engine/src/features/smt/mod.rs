//! SMT (Satisfiability Modulo Theories) Module
//!
//! Term construction and satisfiability checking for the concolic engine.
//!
//! ## Architecture
//!
//! ```text
//! SMT
//! ├── domain/               # Solver-independent models
//! │   └── sort              # Bool / Int / Real / String / Array sorts
//! └── infrastructure/       # Implementation
//!     └── solvers           # Z3 terms, sessions, models
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use concolic_engine::features::smt::{ConstraintSolver, TermSort, Z3Context, Z3Solver};
//!
//! let ctx = Z3Context::new();
//! let mut solver = Z3Solver::new(&ctx, 5_000);
//!
//! let x = ctx.constant("x", &TermSort::Real).unwrap();
//! let ten = ctx.real_from_integer(10).unwrap();
//! let x_lt_10 = ctx.lt(&x, &ten).unwrap();
//!
//! assert!(solver.check_with(&x_lt_10, &[]).is_sat());
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::TermSort;
pub use infrastructure::{
    Checks, ConstraintSolver, ModelEval, SolverResult, Term, Z3Context, Z3Model, Z3Solver,
};
