//! Z3 Solver Session
//!
//! Incremental `z3::Solver` with a per-query timeout, applied again after
//! every reset.

use super::z3_backend::{Term, Z3Context};
use super::{ConstraintSolver, ModelEval, SolverResult};
use z3::{Model, Params, SatResult, Solver};

/// Z3 solver session
pub struct Z3Solver {
    // Declared before `ctx`: native objects are released while the context is alive
    solver: Solver<'static>,
    ctx: Z3Context,
    timeout_ms: u64,
    scopes: u32,
}

impl Z3Solver {
    /// Create a solver whose every `check` gives up after `timeout_ms`
    pub fn new(ctx: &Z3Context, timeout_ms: u64) -> Self {
        let solver = Self {
            solver: Solver::new(ctx.z3()),
            ctx: ctx.clone(),
            timeout_ms,
            scopes: 0,
        };
        solver.apply_timeout();
        solver
    }

    pub fn context(&self) -> &Z3Context {
        &self.ctx
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Open scopes
    pub fn depth(&self) -> u32 {
        self.scopes
    }

    fn apply_timeout(&self) {
        let mut params = Params::new(self.ctx.z3());
        params.set_u32("timeout", u32::try_from(self.timeout_ms).unwrap_or(u32::MAX));
        self.solver.set_params(&params);
    }

    fn check(&mut self) -> SolverResult<Z3Model> {
        match self.solver.check() {
            SatResult::Unsat => SolverResult::Unsat,
            SatResult::Unknown => {
                tracing::debug!(timeout_ms = self.timeout_ms, "z3 returned unknown");
                SolverResult::Unknown
            }
            SatResult::Sat => match self.solver.get_model() {
                Some(model) => SolverResult::Sat(Z3Model {
                    model,
                    _ctx: self.ctx.clone(),
                }),
                None => SolverResult::Unknown,
            },
        }
    }
}

impl ConstraintSolver for Z3Solver {
    type Model = Z3Model;

    fn name(&self) -> &'static str {
        "z3"
    }

    fn assert(&mut self, term: &Term) {
        match term.boolean() {
            Some(condition) => self.solver.assert(&condition),
            None => {
                tracing::warn!(term = %term, sort = %term.sort(), "non-boolean assertion dropped")
            }
        }
    }

    fn push(&mut self) {
        self.solver.push();
        self.scopes += 1;
    }

    fn pop(&mut self) {
        if self.scopes == 0 {
            return;
        }
        self.solver.pop(1);
        self.scopes -= 1;
    }

    fn reset(&mut self) {
        self.solver.reset();
        self.scopes = 0;
        self.apply_timeout();
    }

    fn check_with(&mut self, target: &Term, side: &[Term]) -> SolverResult<Z3Model> {
        self.push();
        self.assert(target);
        for term in side {
            self.assert(term);
        }
        let outcome = self.check();
        self.pop();
        outcome
    }
}

/// Satisfying assignment returned by [`Z3Solver`]
pub struct Z3Model {
    model: Model<'static>,
    _ctx: Z3Context,
}

impl ModelEval for Z3Model {
    fn eval(&self, term: &Term) -> Option<Term> {
        let value = self.model.eval(term.ast(), true)?;
        Some(term.rewrap(value))
    }
}
