//! Field and index access
//!
//! Reads model string indexing, array indexing (with an explicit bounds
//! branch) and `.length`. Writes model array index updates and `.length`
//! assignment; each write mints a fresh length constant.

use super::symbolic_state::SymbolicState;
use crate::features::concolic::domain::{
    ArraySymbol, ConcolicValue, ConcreteKind, ConcreteValue, Symbolic,
};
use crate::features::concolic::ports::CoverageTracker;
use crate::features::smt::{Term, TermSort};

/// Exclusive upper bound of a valid array index
pub const MAX_ARRAY_INDEX: f64 = 4_294_967_295.0;

impl<C: CoverageTracker> SymbolicState<C> {
    /// Term for `base[field]`, or `None` when the access is not modeled.
    ///
    /// Array reads first record the branch `0 <= index < length` so the
    /// search can later explore the out-of-range sibling.
    pub fn symbolic_field(&mut self, base: &ConcolicValue, field: &ConcolicValue) -> Option<Term> {
        if !base.is_symbolic() && !field.is_symbolic() {
            return None;
        }

        match (&base.concrete, &field.concrete) {
            (ConcreteValue::String(_), ConcreteValue::Number(_)) => {
                // No bounds modeling: an out-of-range index selects the empty string
                let seq = self.as_symbolic(base)?;
                let index = self.as_symbolic(field)?;
                self.ctx.seq_at(&seq, &index)
            }
            (ConcreteValue::Array(items), ConcreteValue::Number(_))
                if self.config.arrays_enabled =>
            {
                let array = base.array_symbol()?.clone();
                self.array_lookup(&array, items.len(), field)
            }
            (ConcreteValue::String(_), ConcreteValue::String(name)) if name == "length" => {
                let seq = base.term()?;
                self.ctx.seq_length(seq)
            }
            (ConcreteValue::Array(_), ConcreteValue::String(name)) if name == "length" => {
                base.array_symbol().map(|array| array.length().clone())
            }
            (base_c, field_c) => {
                tracing::info!(
                    base = %base_c.kind(),
                    field = %field_c,
                    "unsupported symbolic field, concretizing"
                );
                None
            }
        }
    }

    fn array_lookup(
        &mut self,
        array: &ArraySymbol,
        concrete_len: usize,
        field: &ConcolicValue,
    ) -> Option<Term> {
        let index_c = field.concrete.as_integer()?;
        let in_bounds =
            index_c >= 0.0 && index_c < MAX_ARRAY_INDEX && index_c < concrete_len as f64;

        let index = self.as_symbolic(field)?;
        let zero = self.ctx.int_val(0)?;
        let lower = self.ctx.ge(&index, &zero)?;
        let upper = self.ctx.lt(&index, array.length())?;
        let bounds = self.ctx.and(&[&lower, &upper])?;

        // Recorded as a real branch so the negation yields another input
        self.symbolic_conditional(&ConcolicValue::with_term(in_bounds, Some(bounds)));

        if in_bounds {
            tracing::debug!(index = index_c, "array read within bounds");
            self.ctx.select(array.array(), &index)
        } else {
            tracing::debug!(index = index_c, len = concrete_len, "array read out of bounds");
            None
        }
    }

    /// Model `base[field] = value` on a symbolic array.
    ///
    /// Updates the symbolic half of `base` in place; the interpreter updates
    /// the concrete half. Targets other than integer indices and `.length`
    /// are ignored.
    pub fn symbolic_set_field(
        &mut self,
        base: &mut ConcolicValue,
        field: &ConcolicValue,
        value: &ConcolicValue,
    ) {
        if !self.config.arrays_enabled {
            return;
        }
        let Some(concrete_len) = base.concrete.as_array().map(<[ConcreteValue]>::len) else {
            return;
        };
        let Some(mut array) = base.array_symbol().cloned() else {
            return;
        };

        let updated = match &field.concrete {
            ConcreteValue::Number(_) => self.set_index(&mut array, concrete_len, field, value),
            ConcreteValue::String(name) if name == "length" => self.set_length(&mut array, value),
            _ => None,
        };

        if updated.is_some() {
            base.symbolic = Some(Symbolic::Array(array));
        }
    }

    fn set_index(
        &mut self,
        array: &mut ArraySymbol,
        concrete_len: usize,
        field: &ConcolicValue,
        value: &ConcolicValue,
    ) -> Option<()> {
        let Some(index_c) = field
            .concrete
            .as_integer()
            .filter(|i| *i >= 0.0 && *i < MAX_ARRAY_INDEX)
        else {
            tracing::debug!(field = %field.concrete, "array write at non-index, ignored");
            return None;
        };
        if value.kind().sort().as_ref() != array.element_sort() {
            tracing::debug!(value = %value.kind(), "array write breaks element sort, ignored");
            return None;
        }

        let index = self.as_symbolic(field)?;
        let element = self.as_symbolic(value)?;
        let new_array = self.ctx.store(array.array(), &index, &element)?;

        let length_name = array.next_length_name();
        let new_length = self.ctx.constant(&length_name, &TermSort::Int)?;
        let one = self.ctx.real_from_integer(1)?;
        let next = self.ctx.add(&index, &one)?;
        let covers_index = self.ctx.ge(&new_length, &next)?;

        tracing::debug!(index = index_c, length = %length_name, "array index write");
        array.set_array(new_array);
        array.set_length(new_length);
        self.push_condition(covers_index, true);

        if index_c > concrete_len as f64 {
            self.add_error(format!(
                "write to {}[{}] past length {} leaves unmodelled holes",
                array.name(),
                index_c,
                concrete_len
            ));
        }
        Some(())
    }

    fn set_length(&mut self, array: &mut ArraySymbol, value: &ConcolicValue) -> Option<()> {
        if value.kind() != ConcreteKind::Number || value.concrete.as_integer().is_none() {
            return None;
        }
        let requested = self.as_symbolic(value)?;

        let length_name = array.next_length_name();
        let new_length = self.ctx.constant(&length_name, &TermSort::Int)?;
        let zero = self.ctx.int_val(0)?;
        let at_least = self.ctx.ge(&new_length, &requested)?;
        let non_negative = self.ctx.ge(&new_length, &zero)?;
        let bound = self.ctx.and(&[&at_least, &non_negative])?;

        tracing::debug!(value = %value.concrete, length = %length_name, "array length write");
        array.set_length(new_length);
        self.push_condition(bound, true);
        Some(())
    }
}
