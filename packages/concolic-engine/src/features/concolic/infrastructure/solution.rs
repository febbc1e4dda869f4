//! Solution extraction
//!
//! Converts a satisfying model back into a complete input map.

use crate::features::concolic::domain::{ArraySymbol, ConcreteValue, InputMap, Symbolic};
use crate::features::smt::{ModelEval, Term, TermSort, Z3Context};
use rustc_hash::FxHashMap;

/// Reads every declared input out of a model
pub struct SolutionExtractor<'a> {
    pub ctx: &'a Z3Context,
    pub symbols: &'a FxHashMap<String, Option<Symbolic>>,
    /// Current run's inputs; values without a symbolic model are carried over
    pub fallback: &'a InputMap,
    pub max_array_len: usize,
}

impl SolutionExtractor<'_> {
    pub fn extract<M: ModelEval>(&self, model: &M) -> InputMap {
        let mut solution = self.fallback.clone();

        for (name, symbol) in self.symbols {
            let value = match symbol {
                Some(Symbolic::Term(term)) => scalar_value(model, term),
                Some(Symbolic::Array(array)) => self.array_value(model, array),
                None => None,
            };
            match value {
                Some(value) => {
                    solution.insert(name.as_str(), value);
                }
                None => {
                    tracing::debug!(name = %name, "no model value, keeping concrete input");
                }
            }
        }

        solution
    }

    fn array_value<M: ModelEval>(&self, model: &M, array: &ArraySymbol) -> Option<ConcreteValue> {
        let len = model.eval(array.length())?.as_i64()?.max(0);
        let len = usize::try_from(len).unwrap_or(usize::MAX).min(self.max_array_len);

        let mut items = Vec::with_capacity(len);
        for i in 0..len {
            let index = self.ctx.int_val(i64::try_from(i).ok()?)?;
            let select = self.ctx.select(array.array(), &index)?;
            items.push(scalar_value(model, &select)?);
        }
        Some(ConcreteValue::Array(items))
    }
}

/// Language value of a scalar term under `model`
fn scalar_value<M: ModelEval>(model: &M, term: &Term) -> Option<ConcreteValue> {
    let value = model.eval(term)?;
    match term.sort() {
        TermSort::Bool => value.as_bool().map(ConcreteValue::Boolean),
        TermSort::Int | TermSort::Real => value.as_f64().map(ConcreteValue::Number),
        TermSort::String => value.as_string().map(ConcreteValue::String),
        TermSort::Array(_) => None,
    }
}
