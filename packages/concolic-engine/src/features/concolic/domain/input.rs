//! Inputs, Candidates & Reports
//!
//! An [`InputMap`] is the test vector of one run. The search turns a run's
//! path condition into [`Alternative`]s, each carrying the input map for a
//! sibling run and the bound that run starts exploring from.

use super::path_condition::BranchId;
use super::values::ConcreteValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named concrete inputs of one run plus its exploration bound
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMap {
    values: BTreeMap<String, ConcreteValue>,
    /// Path-condition entries already explored by earlier generations
    bound: usize,
}

impl InputMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bound(mut self, bound: usize) -> Self {
        self.bound = bound;
        self
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ConcreteValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn bound(&self) -> usize {
        self.bound
    }

    pub fn set_bound(&mut self, bound: usize) {
        self.bound = bound;
    }

    pub fn get(&self, name: &str) -> Option<&ConcreteValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: ConcreteValue,
    ) -> Option<ConcreteValue> {
        self.values.insert(name.into(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConcreteValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Candidate input for a sibling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Complete input map, bound set past the negated entry
    pub input: InputMap,
    /// Rendered negated condition
    pub pc: String,
    /// Branch id of the negated entry
    pub branch_id: Option<BranchId>,
}

/// Counters for one `alternatives()` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub queries: usize,
    pub sat: usize,
    pub unsat: usize,
    /// Timeouts and other unknowns; treated like unsat
    pub unknown: usize,
    pub candidates: usize,
}

impl SearchStats {
    pub fn merge(&mut self, other: &SearchStats) {
        self.queries += other.queries;
        self.sat += other.sat;
        self.unsat += other.unsat;
        self.unknown += other.unknown;
        self.candidates += other.candidates;
    }
}

/// Everything the driver needs from one finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub final_pc: String,
    pub final_input: InputMap,
    pub alternatives: Vec<Alternative>,
    pub errors: Vec<String>,
    pub stats: SearchStats,
}
