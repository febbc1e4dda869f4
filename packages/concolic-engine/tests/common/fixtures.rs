//! Test fixtures
//!
//! Engine construction and a worklist driver standing in for the
//! interpreter loop of a concolic tester.

use concolic_engine::config::{EngineConfig, Preset};
use concolic_engine::features::concolic::{
    BinaryOp, ConcolicValue, ConcreteValue, CoverageTracker, InputMap, SymbolicState,
};
use std::collections::VecDeque;
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; `RUST_LOG` selects the level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn test_config() -> EngineConfig {
    EngineConfig::preset(Preset::Fast)
}

/// Engine for a fresh run on `input`
pub fn engine(input: InputMap) -> SymbolicState {
    init_tracing();
    SymbolicState::new(input, test_config()).expect("engine creation")
}

/// Engine for a first run with no recorded inputs
pub fn fresh_engine() -> SymbolicState {
    engine(InputMap::new())
}

/// Evaluate `left op right` concretely, attach its term and branch on it.
///
/// Returns the branch taken.
pub fn branch<C: CoverageTracker>(
    state: &mut SymbolicState<C>,
    op: BinaryOp,
    left: &ConcolicValue,
    right: &ConcolicValue,
) -> bool {
    let concrete = evaluate(op, &left.concrete, &right.concrete);
    let term = state.symbolic_binary(op, left, right);
    state.symbolic_conditional(&ConcolicValue::with_term(concrete, term))
}

/// Concrete semantics of the comparison operators used by the fixtures
pub fn evaluate(op: BinaryOp, left: &ConcreteValue, right: &ConcreteValue) -> bool {
    use ConcreteValue::{Boolean, Number, String as Str};
    match (op, left, right) {
        (BinaryOp::Eq | BinaryOp::StrictEq, l, r) => l == r,
        (BinaryOp::Ne | BinaryOp::StrictNe, l, r) => l != r,
        (BinaryOp::Lt, Number(l), Number(r)) => l < r,
        (BinaryOp::Le, Number(l), Number(r)) => l <= r,
        (BinaryOp::Gt, Number(l), Number(r)) => l > r,
        (BinaryOp::Ge, Number(l), Number(r)) => l >= r,
        (BinaryOp::And, Boolean(l), Boolean(r)) => *l && *r,
        (BinaryOp::Or, Boolean(l), Boolean(r)) => *l || *r,
        (BinaryOp::Lt, Str(l), Str(r)) => l < r,
        _ => false,
    }
}

/// One completed run of a driven program
#[derive(Debug)]
pub struct Run<T> {
    pub input: InputMap,
    pub outcome: T,
    pub candidates: usize,
}

/// Explore `program` breadth-first from `seed`, at most `max_runs` runs.
///
/// Every run gets a fresh engine on its input; every candidate the search
/// returns is queued for a later run.
pub fn explore<T>(
    seed: InputMap,
    max_runs: usize,
    mut program: impl FnMut(&mut SymbolicState) -> T,
) -> Vec<Run<T>> {
    init_tracing();
    let mut queue = VecDeque::from([seed]);
    let mut runs = Vec::new();

    while let Some(input) = queue.pop_front() {
        if runs.len() >= max_runs {
            break;
        }
        let mut state = SymbolicState::new(input, test_config()).expect("engine creation");
        let outcome = program(&mut state);
        let alternatives = state.alternatives().expect("replay stays on the recorded path");

        let candidates = alternatives.len();
        queue.extend(alternatives.into_iter().map(|alt| alt.input));
        runs.push(Run {
            input: state.final_input().clone(),
            outcome,
            candidates,
        });
    }

    runs
}
