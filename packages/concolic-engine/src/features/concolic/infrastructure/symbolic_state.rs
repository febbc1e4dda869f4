//! Symbolic State
//!
//! Per-run engine state: solver context and session, the path-condition
//! log, the input-symbol table and the error list. The instrumented
//! interpreter calls into it once per primitive operation touched by
//! symbolic data; the driver calls [`SymbolicState::alternatives`] (or
//! [`SymbolicState::finish`]) once the run completes.
//!
//! Operation families live in sibling modules:
//! - `constants`: literal wrapping
//! - `operators`: binary/unary operators, boolean coercion
//! - `fields`: field/index reads and array writes
//! - `search`: generational search
//! - `solution`: model read-back

use crate::config::{EngineConfig, Validatable};
use crate::errors::Result;
use crate::features::concolic::domain::{
    ArraySymbol, ConcolicValue, ConcreteValue, GenerationReport, InputMap, PathConditionEntry,
    SearchStats, Symbolic,
};
use crate::features::concolic::ports::{CoverageTracker, NoCoverage};
use crate::features::smt::{Term, TermSort, Z3Context, Z3Solver};
use rustc_hash::FxHashMap;

/// Symbolic-state engine for one concrete run
pub struct SymbolicState<C: CoverageTracker = NoCoverage> {
    pub(super) ctx: Z3Context,
    pub(super) solver: Z3Solver,
    pub(super) config: EngineConfig,
    pub(super) input: InputMap,
    /// Declared inputs; `None` for inputs with no symbolic model
    pub(super) input_symbols: FxHashMap<String, Option<Symbolic>>,
    pub(super) path_condition: Vec<PathConditionEntry>,
    pub(super) errors: Vec<String>,
    pub(super) coverage: C,
    pub(super) stats: SearchStats,
}

impl SymbolicState<NoCoverage> {
    /// Engine for a run on `input`, without branch ids
    pub fn new(input: InputMap, config: EngineConfig) -> Result<Self> {
        Self::with_coverage(input, config, NoCoverage)
    }
}

impl<C: CoverageTracker> SymbolicState<C> {
    /// Engine for a run on `input`, tagging entries from `coverage`
    pub fn with_coverage(input: InputMap, config: EngineConfig, coverage: C) -> Result<Self> {
        config.validate()?;
        let ctx = Z3Context::new();
        let solver = Z3Solver::new(&ctx, config.solver_timeout_ms);

        tracing::debug!(
            bound = input.bound(),
            inputs = input.len(),
            timeout_ms = config.solver_timeout_ms,
            "symbolic state created"
        );

        Ok(Self {
            ctx,
            solver,
            config,
            input,
            input_symbols: FxHashMap::default(),
            path_condition: Vec::new(),
            errors: Vec::new(),
            coverage,
            stats: SearchStats::default(),
        })
    }

    pub fn context(&self) -> &Z3Context {
        &self.ctx
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Symbolic Inputs
    // ═══════════════════════════════════════════════════════════════════════

    /// Declare the symbolic input `name`.
    ///
    /// The concrete half comes from the current input map when this run was
    /// generated by the search, otherwise `seed` is recorded as the input.
    pub fn create_symbolic_value(&mut self, name: &str, seed: ConcreteValue) -> ConcolicValue {
        let symbolic = self.make_symbol(name, &seed);

        let concrete = match self.input.get(name) {
            Some(existing) => existing.clone(),
            None => {
                self.input.insert(name, seed.clone());
                seed
            }
        };

        match &symbolic {
            Some(symbolic) => {
                tracing::info!(name, %symbolic, %concrete, "fresh symbolic input");
            }
            None => {
                tracing::info!(
                    name,
                    %concrete,
                    kind = %concrete.kind(),
                    "input has no symbolic model"
                );
            }
        }

        self.input_symbols.insert(name.to_string(), symbolic.clone());
        ConcolicValue::new(concrete, symbolic)
    }

    fn make_symbol(&mut self, name: &str, seed: &ConcreteValue) -> Option<Symbolic> {
        if let ConcreteValue::Array(_) = seed {
            return self.make_array_symbol(name, seed).map(Symbolic::Array);
        }
        let Some(sort) = seed.kind().sort() else {
            tracing::warn!(
                name,
                kind = %seed.kind(),
                "symbolic input of this kind is not supported"
            );
            return None;
        };
        self.ctx.constant(name, &sort).map(Symbolic::Term)
    }

    /// Homogeneous arrays become array-sort symbols with a `length >= 0` binder
    fn make_array_symbol(&mut self, name: &str, seed: &ConcreteValue) -> Option<ArraySymbol> {
        if !self.config.arrays_enabled {
            tracing::debug!(name, "array modeling disabled, input is opaque");
            return None;
        }
        let elem = match seed.homogeneous_elements() {
            // Element sort of an empty array is unknown, default to numbers
            Some(None) => TermSort::Real,
            Some(Some(kind)) => kind.sort()?,
            None => {
                tracing::debug!(name, "mixed array, input is opaque");
                return None;
            }
        };

        let array = self.ctx.constant(name, &TermSort::array_of(elem))?;
        let length = self.ctx.constant(&format!("{}_Length", name), &TermSort::Int)?;
        let zero = self.ctx.int_val(0)?;
        let non_negative = self.ctx.ge(&length, &zero)?;
        self.push_condition(non_negative, true);

        Some(ArraySymbol::new(name, array, length))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Path Condition
    // ═══════════════════════════════════════════════════════════════════════

    /// Append `term`, tagged with the last executed branch
    pub fn push_condition(&mut self, term: Term, binder: bool) {
        let branch_id = self.coverage.last_branch_id();
        tracing::debug!(
            index = self.path_condition.len(),
            binder,
            branch = ?branch_id,
            term = %term,
            "path condition entry"
        );
        let entry = if binder {
            PathConditionEntry::binder(term, branch_id)
        } else {
            PathConditionEntry::branch(term, branch_id)
        };
        self.path_condition.push(entry);
    }

    /// Append the negation of `term` as a branch entry
    pub fn push_not(&mut self, term: &Term) {
        match self.ctx.not(term) {
            Some(negated) => self.push_condition(negated, false),
            None => tracing::warn!(term = %term, "cannot negate non-boolean term"),
        }
    }

    /// Record the branch taken on `result` and return its concrete truthiness.
    ///
    /// Non-boolean results are coerced first; results without a symbolic
    /// half (or that cannot be coerced) record nothing.
    pub fn symbolic_conditional(&mut self, result: &ConcolicValue) -> bool {
        let taken = result.concrete.truthy();
        if !result.is_symbolic() {
            return taken;
        }

        let Some(condition) = self.symbolic_coerce_to_bool(result) else {
            tracing::debug!(value = %result, "branch on uncoercible value, not recorded");
            return taken;
        };

        if taken {
            self.push_condition(condition, false);
        } else {
            self.push_not(&condition);
        }
        taken
    }

    pub fn path_condition(&self) -> &[PathConditionEntry] {
        &self.path_condition
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Value Accessors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn is_symbolic(&self, value: &ConcolicValue) -> bool {
        value.is_symbolic()
    }

    pub fn get_symbolic<'v>(&self, value: &'v ConcolicValue) -> Option<&'v Symbolic> {
        value.symbolic.as_ref()
    }

    pub fn get_concrete<'v>(&self, value: &'v ConcolicValue) -> &'v ConcreteValue {
        &value.concrete
    }

    /// Symbolic half, else the wrapped concrete half
    pub fn as_symbolic(&self, value: &ConcolicValue) -> Option<Term> {
        match value.term() {
            Some(term) => Some(term.clone()),
            None => self.wrap_constant(&value.concrete),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Errors
    // ═══════════════════════════════════════════════════════════════════════

    pub fn add_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(error = %error, "engine error recorded");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Reporting
    // ═══════════════════════════════════════════════════════════════════════

    /// Conjunction of every entry, empty when nothing was recorded
    pub fn final_pc(&self) -> String {
        if self.path_condition.is_empty() {
            return String::new();
        }
        let terms: Vec<&Term> = self.path_condition.iter().map(|e| &e.term).collect();
        match self.ctx.and(&terms) {
            Some(conjunction) => self.render(&conjunction),
            None => String::new(),
        }
    }

    /// Input map of this run
    pub fn final_input(&self) -> &InputMap {
        &self.input
    }

    /// Counters accumulated over every `alternatives()` call
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run the search and bundle everything the driver needs
    pub fn finish(&mut self) -> Result<GenerationReport> {
        let alternatives = self.alternatives()?;
        Ok(GenerationReport {
            final_pc: self.final_pc(),
            final_input: self.input.clone(),
            alternatives,
            errors: self.errors.clone(),
            stats: self.stats,
        })
    }

    pub(super) fn render(&self, term: &Term) -> String {
        render_term(&self.ctx, term, self.config.simplify_reports)
    }
}

/// Display form of a condition, simplified on request
pub(super) fn render_term(ctx: &Z3Context, term: &Term, simplify: bool) -> String {
    if simplify {
        if let Some(simplified) = ctx.simplify(term) {
            return simplified.to_string();
        }
    }
    term.to_string()
}
