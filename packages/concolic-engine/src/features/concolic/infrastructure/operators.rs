//! Operator constraints
//!
//! Builds the term mirroring a primitive operator. Any operand or operator
//! combination without modeled semantics yields `None`, and the interpreter
//! keeps the result concrete-only.

use super::symbolic_state::SymbolicState;
use crate::features::concolic::domain::{
    BinaryOp, ConcolicValue, ConcreteKind, ConcreteValue, UnaryOp,
};
use crate::features::concolic::ports::CoverageTracker;
use crate::features::smt::Term;

impl<C: CoverageTracker> SymbolicState<C> {
    /// Term for `left op right`.
    ///
    /// `None` when neither operand is symbolic, when either is `null` or
    /// `undefined`, when their concrete kinds differ, or when the operator has
    /// no semantics for the operand sorts.
    pub fn symbolic_binary(
        &self,
        op: BinaryOp,
        left: &ConcolicValue,
        right: &ConcolicValue,
    ) -> Option<Term> {
        if !left.is_symbolic() && !right.is_symbolic() {
            return None;
        }
        if left.concrete.is_nullish() || right.concrete.is_nullish() {
            return None;
        }
        if left.kind() != right.kind() {
            tracing::debug!(
                %op,
                left = %left.kind(),
                right = %right.kind(),
                "mixed operand kinds, concretizing"
            );
            return None;
        }

        let lhs = self.as_symbolic(left)?;
        let rhs = self.as_symbolic(right)?;
        let ctx = &self.ctx;

        let result = match op {
            BinaryOp::Eq | BinaryOp::StrictEq => ctx.eq(&lhs, &rhs),
            BinaryOp::Ne | BinaryOp::StrictNe => ctx.eq(&lhs, &rhs).and_then(|eq| ctx.not(&eq)),
            BinaryOp::And => ctx.and(&[&lhs, &rhs]),
            BinaryOp::Or => ctx.or(&[&lhs, &rhs]),
            BinaryOp::Lt => ctx.lt(&lhs, &rhs),
            BinaryOp::Le => ctx.le(&lhs, &rhs),
            BinaryOp::Gt => ctx.gt(&lhs, &rhs),
            BinaryOp::Ge => ctx.ge(&lhs, &rhs),
            BinaryOp::Add if left.kind() == ConcreteKind::String => ctx.concat(&lhs, &rhs),
            BinaryOp::Add => ctx.add(&lhs, &rhs),
            BinaryOp::Sub => ctx.sub(&lhs, &rhs),
            BinaryOp::Mul => ctx.mul(&lhs, &rhs),
            BinaryOp::Div => ctx.div(&lhs, &rhs),
            BinaryOp::Mod => ctx.modulo(&lhs, &rhs),
        };

        if result.is_none() {
            tracing::debug!(
                %op,
                kind = %left.kind(),
                "operator has no semantics for these operands"
            );
        }
        result
    }

    /// [`symbolic_binary`](Self::symbolic_binary) from a source token
    pub fn symbolic_binary_token(
        &self,
        token: &str,
        left: &ConcolicValue,
        right: &ConcolicValue,
    ) -> Option<Term> {
        match token.parse::<BinaryOp>() {
            Ok(op) => self.symbolic_binary(op, left, right),
            Err(err) => {
                tracing::info!(token, "{}, concretizing", err);
                None
            }
        }
    }

    /// Term for `op operand`
    pub fn symbolic_unary(&self, op: UnaryOp, operand: &ConcolicValue) -> Option<Term> {
        let ctx = &self.ctx;
        match op {
            UnaryOp::Not => {
                let condition = self.symbolic_coerce_to_bool(operand)?;
                ctx.not(&condition)
            }
            UnaryOp::Plus => {
                let term = operand.term()?;
                match operand.kind() {
                    ConcreteKind::String => ctx.int_to_real(&ctx.str_to_int(term)?),
                    ConcreteKind::Number | ConcreteKind::Boolean => Some(term.clone()),
                    _ => None,
                }
            }
            UnaryOp::Minus => {
                let term = operand.term()?;
                match operand.kind() {
                    ConcreteKind::String => {
                        // Integer parse: numeric strings with a fraction are misread
                        tracing::info!(
                            "casting string to int for unary minus, \
                             non-integral values are incorrect"
                        );
                        ctx.neg(&ctx.int_to_real(&ctx.str_to_int(term)?)?)
                    }
                    ConcreteKind::Number => ctx.neg(term),
                    _ => None,
                }
            }
            UnaryOp::TypeOf => None,
        }
    }

    /// [`symbolic_unary`](Self::symbolic_unary) from a source token
    pub fn symbolic_unary_token(&self, token: &str, operand: &ConcolicValue) -> Option<Term> {
        match token.parse::<UnaryOp>() {
            Ok(op) => self.symbolic_unary(op, operand),
            Err(err) => {
                tracing::info!(token, "{}, concretizing", err);
                None
            }
        }
    }

    /// Boolean term for the truthiness of `value`.
    ///
    /// Booleans pass through, numbers compare `!= 0`, strings `!= ""`.
    pub fn symbolic_coerce_to_bool(&self, value: &ConcolicValue) -> Option<Term> {
        match value.kind() {
            ConcreteKind::Boolean => value.term().cloned(),
            ConcreteKind::Number => {
                let zero = ConcolicValue::concrete(ConcreteValue::Number(0.0));
                self.symbolic_binary(BinaryOp::StrictNe, value, &zero)
            }
            ConcreteKind::String => {
                let empty = ConcolicValue::concrete("");
                self.symbolic_binary(BinaryOp::StrictNe, value, &empty)
            }
            kind => {
                tracing::debug!(%kind, "cannot coerce to boolean");
                None
            }
        }
    }
}
