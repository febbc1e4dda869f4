//! Constant wrapping

use super::symbolic_state::SymbolicState;
use crate::features::concolic::domain::ConcreteValue;
use crate::features::concolic::ports::CoverageTracker;
use crate::features::smt::Term;

impl<C: CoverageTracker> SymbolicState<C> {
    /// Solver literal for a concrete scalar.
    ///
    /// Whole numbers become exact rationals, other finite numbers are parsed
    /// from their shortest decimal form. Non-finite numbers, arrays, `null`
    /// and `undefined` have no literal and return `None`.
    pub fn wrap_constant(&self, value: &ConcreteValue) -> Option<Term> {
        match value {
            ConcreteValue::Boolean(b) => self.ctx.bool_val(*b),
            ConcreteValue::Number(n) if !n.is_finite() => {
                tracing::debug!(value = %n, "non-finite number literal, concretizing");
                None
            }
            ConcreteValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                self.ctx.real_from_integer(*n as i64)
            }
            ConcreteValue::Number(n) => self.ctx.real_from_decimal(&format!("{}", n)),
            ConcreteValue::String(s) => self.ctx.string_val(s),
            other => {
                tracing::debug!(
                    kind = %other.kind(),
                    "symbolic expressions with this literal kind are not supported"
                );
                None
            }
        }
    }
}
