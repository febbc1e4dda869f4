//! Generational Search
//!
//! Replays a run's path condition and negates one unexplored branch at a
//! time:
//!
//! ```text
//! entries:  [0 ........ bound) [bound ............................ len)
//!            asserted history   for each non-binder entry i:
//!                                 check ¬e[i] ∧ checks  → candidate, bound = i+1
//!                               then assert e[i] and push
//! ```
//!
//! Each candidate negates exactly one entry and keeps `[0, i)` as observed.
//! The solver session is reset when the search returns, on every path.

use super::solution::SolutionExtractor;
use super::symbolic_state::{render_term, SymbolicState};
use crate::errors::{ConcolicError, Result};
use crate::features::concolic::domain::{Alternative, InputMap, PathConditionEntry, SearchStats};
use crate::features::concolic::ports::CoverageTracker;
use crate::features::smt::{ConstraintSolver, SolverResult, Term, Z3Context};
use std::ops::{Deref, DerefMut};

/// Solver session that is reset when dropped
struct ResetOnDrop<'a, S: ConstraintSolver> {
    solver: &'a mut S,
}

impl<'a, S: ConstraintSolver> ResetOnDrop<'a, S> {
    fn new(solver: &'a mut S) -> Self {
        Self { solver }
    }
}

impl<S: ConstraintSolver> Deref for ResetOnDrop<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.solver
    }
}

impl<S: ConstraintSolver> DerefMut for ResetOnDrop<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.solver
    }
}

impl<S: ConstraintSolver> Drop for ResetOnDrop<'_, S> {
    fn drop(&mut self) {
        self.solver.reset();
    }
}

/// One generational search over a recorded path condition
pub struct GenerationalSearch<'a, S: ConstraintSolver> {
    pub solver: &'a mut S,
    pub ctx: &'a Z3Context,
    /// Simplify the negated condition before rendering it
    pub simplify: bool,
}

impl<S: ConstraintSolver> GenerationalSearch<'_, S> {
    /// Candidates for every non-binder entry at or past `bound`.
    ///
    /// `extract` turns a model into the candidate's input map; the model is
    /// released as soon as it returns.
    pub fn run<F>(
        self,
        path: &[PathConditionEntry],
        bound: usize,
        stats: &mut SearchStats,
        mut extract: F,
    ) -> Result<Vec<Alternative>>
    where
        F: FnMut(&S::Model) -> InputMap,
    {
        if bound > path.len() {
            tracing::warn!(bound, path_len = path.len(), "replay diverged from explored prefix");
            return Err(ConcolicError::Diverged {
                bound,
                path_len: path.len(),
            });
        }

        let ctx = self.ctx;
        let mut session = ResetOnDrop::new(self.solver);
        tracing::debug!(
            solver = session.name(),
            bound,
            path_len = path.len(),
            "generational search"
        );

        // Side-conditions of every branch taken so far
        let mut true_checks: Vec<Term> = Vec::new();

        for entry in &path[..bound] {
            session.assert(&entry.term);
            if !entry.binder {
                true_checks.extend(entry.term.checks().when_true.iter().cloned());
            }
        }
        session.push();

        let mut alternatives = Vec::new();
        for (i, entry) in path.iter().enumerate().skip(bound) {
            if !entry.binder {
                if let Some(negated) = ctx.not(&entry.term) {
                    let mut side = true_checks.clone();
                    side.extend(negated.checks().when_true.iter().cloned());

                    stats.queries += 1;
                    match session.check_with(&negated, &side) {
                        SolverResult::Sat(model) => {
                            stats.sat += 1;
                            let mut input = extract(&model);
                            drop(model);
                            input.set_bound(i + 1);

                            let pc = render_term(ctx, &negated, self.simplify);
                            tracing::debug!(
                                index = i,
                                branch = ?entry.branch_id,
                                pc = %pc,
                                "sat, new input"
                            );
                            alternatives.push(Alternative {
                                input,
                                pc,
                                branch_id: entry.branch_id,
                            });
                            stats.candidates += 1;
                        }
                        SolverResult::Unsat => {
                            stats.unsat += 1;
                            tracing::debug!(index = i, "unsat");
                        }
                        SolverResult::Unknown => {
                            stats.unknown += 1;
                            tracing::debug!(index = i, "unknown, branch dropped");
                        }
                    }
                }
                true_checks.extend(entry.term.checks().when_true.iter().cloned());
            }

            session.assert(&entry.term);
            session.push();
        }

        Ok(alternatives)
    }
}

impl<C: CoverageTracker> SymbolicState<C> {
    /// New inputs, one per satisfiable negation of an entry past this run's bound.
    ///
    /// Fails with [`ConcolicError::Diverged`] when the run recorded fewer
    /// entries than its input's bound.
    pub fn alternatives(&mut self) -> Result<Vec<Alternative>> {
        let extractor = SolutionExtractor {
            ctx: &self.ctx,
            symbols: &self.input_symbols,
            fallback: &self.input,
            max_array_len: self.config.max_array_model_len,
        };
        let search = GenerationalSearch {
            solver: &mut self.solver,
            ctx: &self.ctx,
            simplify: self.config.simplify_reports,
        };

        let mut stats = SearchStats::default();
        let result = search.run(&self.path_condition, self.input.bound(), &mut stats, |model| {
            extractor.extract(model)
        });
        self.stats.merge(&stats);

        let alternatives = result?;
        tracing::info!(
            bound = self.input.bound(),
            path_len = self.path_condition.len(),
            queries = stats.queries,
            candidates = alternatives.len(),
            "alternatives generated"
        );
        Ok(alternatives)
    }
}
