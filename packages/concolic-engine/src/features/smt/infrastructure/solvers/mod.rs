//! SMT Solver Sessions
//!
//! The search talks to the solver only through [`ConstraintSolver`]:
//!
//! 1. **assert / push / pop**: incremental prefix of the path condition
//! 2. **check_with**: satisfiability of one extra target in its own scope
//! 3. **reset**: drop every assertion after a search
//!
//! [`Z3Solver`] is the production backend.

pub mod z3_backend;
pub mod z3_solver;

pub use z3_backend::{Checks, Term, Z3Context};
pub use z3_solver::{Z3Model, Z3Solver};

/// Incremental solver session
pub trait ConstraintSolver {
    type Model: ModelEval;

    /// Name of this solver
    fn name(&self) -> &'static str;

    /// Add a permanent assertion to the current scope
    fn assert(&mut self, term: &Term);

    /// Open a scope
    fn push(&mut self);

    /// Close the innermost scope, discarding its assertions
    fn pop(&mut self);

    /// Remove every assertion and scope
    fn reset(&mut self);

    /// Check `target ∧ side` together with the current assertions.
    ///
    /// The extra terms live in a scope of their own, so the session is
    /// unchanged when this returns.
    fn check_with(&mut self, target: &Term, side: &[Term]) -> SolverResult<Self::Model>;
}

/// Evaluation of terms under a satisfying assignment
pub trait ModelEval {
    /// Value of `term` with model completion (unconstrained symbols get a default)
    fn eval(&self, term: &Term) -> Option<Term>;
}

/// Solver result
#[derive(Debug)]
pub enum SolverResult<M> {
    /// Satisfiable, with a model
    Sat(M),

    /// Unsatisfiable (contradiction)
    Unsat,

    /// Unknown (timeout, too complex, unsupported)
    Unknown,
}

impl<M> SolverResult<M> {
    pub fn is_sat(&self) -> bool {
        matches!(self, SolverResult::Sat(_))
    }

    /// Model of a satisfiable result
    pub fn into_model(self) -> Option<M> {
        match self {
            SolverResult::Sat(model) => Some(model),
            _ => None,
        }
    }
}
