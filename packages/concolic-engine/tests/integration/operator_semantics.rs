//! Operator semantics integration tests
//!
//! Each operator's term is solved through the search and the candidate is
//! checked against the operator's concrete meaning.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use concolic_engine::features::concolic::{
    BinaryOp, ConcolicValue, ConcreteValue, InputMap, SymbolicState, UnaryOp,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Record `left op right == expected` as not taken and return the single candidate
fn solve_for(
    state: &mut SymbolicState,
    op: BinaryOp,
    left: &ConcolicValue,
    right: &ConcolicValue,
    expected: f64,
) -> InputMap {
    let term = state.symbolic_binary(op, left, right);
    assert!(term.is_some(), "{op} has no term");
    let result = ConcolicValue::with_term(f64::NAN, term);
    assert!(!branch(state, BinaryOp::StrictEq, &result, &ConcolicValue::concrete(expected)));

    let mut alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1, "{op}: expected exactly one candidate");
    alternatives.remove(0).input
}

/// Declare `v` with `seed`, branch on `v === target` (false) and return the candidate value
fn round_trip(seed: ConcreteValue, target: ConcreteValue) -> Option<ConcreteValue> {
    let mut state = fresh_engine();
    let v = state.create_symbolic_value("v", seed);
    let target = ConcolicValue::concrete(target);

    assert!(!branch(&mut state, BinaryOp::StrictEq, &v, &target));
    let alternatives = state.alternatives().unwrap();
    alternatives.first().and_then(|alt| alt.input.get("v").cloned())
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_arithmetic_solved_for_left_operand() {
    let cases = [
        (BinaryOp::Add, 3.0, 10.0, 7.0),
        (BinaryOp::Sub, 3.0, 4.0, 7.0),
        (BinaryOp::Mul, 4.0, 10.0, 2.5),
        (BinaryOp::Div, 4.0, 0.5, 2.0),
    ];

    for (op, operand, result, expected) in cases {
        let mut state = fresh_engine();
        let x = state.create_symbolic_value("x", ConcreteValue::Number(100.0));
        let input = solve_for(&mut state, op, &x, &ConcolicValue::concrete(operand), result);
        assert_eq!(number(&input, "x"), expected, "{op}");
    }
}

#[test]
fn test_modulo_truncates_operands() {
    let mut state = fresh_engine();
    let x = state.create_symbolic_value("x", ConcreteValue::Number(100.0));

    // assume(10 <= x < 15)
    let ctx = state.context();
    let low = ctx.ge(x.term().unwrap(), &ctx.real_from_integer(10).unwrap()).unwrap();
    let high = ctx.lt(x.term().unwrap(), &ctx.real_from_integer(15).unwrap()).unwrap();
    state.push_condition(low, true);
    state.push_condition(high, true);

    let input = solve_for(&mut state, BinaryOp::Mod, &x, &ConcolicValue::concrete(5.0), 3.0);
    assert_eq!(number(&input, "x").floor(), 13.0);
}

#[test]
fn test_sum_of_two_inputs() {
    let mut state = engine(InputMap::new().with_bound(1));
    let x = state.create_symbolic_value("x", ConcreteValue::Number(2.0));
    let y = state.create_symbolic_value("y", ConcreteValue::Number(0.0));
    assert!(branch(&mut state, BinaryOp::Eq, &x, &ConcolicValue::concrete(2.0)));

    let input = solve_for(&mut state, BinaryOp::Add, &x, &y, 5.0);
    assert_eq!(number(&input, "x"), 2.0);
    assert_eq!(number(&input, "y"), 3.0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Comparison & Logic
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_comparisons_flip() {
    let cases: [(BinaryOp, fn(f64) -> bool); 6] = [
        (BinaryOp::Lt, |x| x < -3.0),
        (BinaryOp::Le, |x| x <= -3.0),
        (BinaryOp::Gt, |x| x <= -3.0),
        (BinaryOp::Ge, |x| x < -3.0),
        (BinaryOp::StrictEq, |x| x == -3.0),
        (BinaryOp::Ne, |x| x == -3.0),
    ];

    for (op, holds) in cases {
        let mut state = fresh_engine();
        let x = state.create_symbolic_value("x", ConcreteValue::Number(0.0));
        branch(&mut state, op, &x, &ConcolicValue::concrete(-3.0));

        let alternatives = state.alternatives().unwrap();
        assert_eq!(alternatives.len(), 1, "{op}");
        let value = number(&alternatives[0].input, "x");
        assert!(holds(value), "{op}: x = {value}");
    }
}

#[test]
fn test_conjunction_and_disjunction() {
    let mut state = fresh_engine();
    let a = state.create_symbolic_value("a", ConcreteValue::Boolean(true));
    let b = state.create_symbolic_value("b", ConcreteValue::Boolean(false));
    assert!(!branch(&mut state, BinaryOp::And, &a, &b));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0].input.get("a"), Some(&ConcreteValue::Boolean(true)));
    assert_eq!(alternatives[0].input.get("b"), Some(&ConcreteValue::Boolean(true)));

    let mut state = fresh_engine();
    let a = state.create_symbolic_value("a", ConcreteValue::Boolean(false));
    let b = state.create_symbolic_value("b", ConcreteValue::Boolean(false));
    assert!(!branch(&mut state, BinaryOp::Or, &a, &b));

    let alternatives = state.alternatives().unwrap();
    let input = &alternatives[0].input;
    assert!(
        input.get("a") == Some(&ConcreteValue::Boolean(true))
            || input.get("b") == Some(&ConcreteValue::Boolean(true))
    );
}

#[test]
fn test_logical_not_of_number() {
    let mut state = fresh_engine();
    let x = state.create_symbolic_value("x", ConcreteValue::Number(0.0));

    // if (!x)
    let negated = ConcolicValue::with_term(true, state.symbolic_unary(UnaryOp::Not, &x));
    assert!(state.symbolic_conditional(&negated));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_ne!(number(&alternatives[0].input, "x"), 0.0);
}

#[test]
fn test_number_truthiness() {
    let mut state = fresh_engine();
    let x = state.create_symbolic_value("x", ConcreteValue::Number(4.0));
    assert!(state.symbolic_conditional(&x));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(number(&alternatives[0].input, "x"), 0.0);
}

#[test]
fn test_unary_minus_on_number() {
    let mut state = fresh_engine();
    let x = state.create_symbolic_value("x", ConcreteValue::Number(1.0));
    let negated = ConcolicValue::with_term(-1.0, state.symbolic_unary(UnaryOp::Minus, &x));
    assert!(!branch(&mut state, BinaryOp::StrictEq, &negated, &ConcolicValue::concrete(12.5)));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(number(&alternatives[0].input, "x"), -12.5);
}

// ═══════════════════════════════════════════════════════════════════════════
// Modeling Boundaries
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_unmodelled_operations_record_nothing() {
    let mut state = fresh_engine();
    let x = state.create_symbolic_value("x", ConcreteValue::Number(1.0));
    let s = state.create_symbolic_value("s", ConcreteValue::from("1"));
    let null = ConcolicValue::concrete(ConcreteValue::Null);

    assert!(state.symbolic_binary(BinaryOp::Add, &x, &s).is_none());
    assert!(state.symbolic_binary(BinaryOp::StrictEq, &x, &null).is_none());
    assert!(state.symbolic_binary_token("in", &x, &x).is_none());
    assert!(state.symbolic_unary(UnaryOp::TypeOf, &x).is_none());

    // A branch on a value with no term records nothing
    assert!(!branch(&mut state, BinaryOp::StrictEq, &x, &s));
    assert!(state.path_condition().is_empty());
    assert!(state.alternatives().unwrap().is_empty());
}

#[test]
fn test_token_dispatch_matches_operators() {
    let mut state = fresh_engine();
    let x = state.create_symbolic_value("x", ConcreteValue::Number(1.0));
    let two = ConcolicValue::concrete(2.0);

    for (token, op) in [("===", BinaryOp::StrictEq), ("<=", BinaryOp::Le), ("%", BinaryOp::Mod)] {
        let by_token = state.symbolic_binary_token(token, &x, &two).unwrap();
        let by_op = state.symbolic_binary(op, &x, &two).unwrap();
        assert_eq!(by_token.to_string(), by_op.to_string());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Constant Round Trip
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_tiny_number_round_trip() {
    init_tracing();
    for value in [1e-70, 1.2345678901234567e-50, -4.9e-300] {
        let back = round_trip(ConcreteValue::Number(1.0), ConcreteValue::Number(value));
        assert_eq!(back, Some(ConcreteValue::Number(value)), "{value:e}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_boolean_round_trip(value in any::<bool>()) {
        let back = round_trip(ConcreteValue::Boolean(!value), ConcreteValue::Boolean(value));
        prop_assert_eq!(back, Some(ConcreteValue::Boolean(value)));
    }

    #[test]
    fn prop_integral_round_trip(value in any::<i32>()) {
        let value = f64::from(value);
        let back = round_trip(ConcreteValue::Number(value + 1.0), ConcreteValue::Number(value));
        prop_assert_eq!(back, Some(ConcreteValue::Number(value)));
    }

    #[test]
    fn prop_fractional_round_trip(
        value in (-1.0e6..1.0e6f64).prop_filter("non-integral", |v| v.fract() != 0.0)
    ) {
        let back = round_trip(ConcreteValue::Number(value + 1.0), ConcreteValue::Number(value));
        prop_assert_eq!(back, Some(ConcreteValue::Number(value)));
    }

    #[test]
    fn prop_tiny_magnitude_round_trip(
        mantissa in 1.0f64..10.0,
        exponent in -300i32..=-5,
        negative in any::<bool>(),
    ) {
        let magnitude = mantissa * 10f64.powi(exponent);
        let value = if negative { -magnitude } else { magnitude };
        let back = round_trip(ConcreteValue::Number(value * 2.0), ConcreteValue::Number(value));
        prop_assert_eq!(back, Some(ConcreteValue::Number(value)));
    }

    #[test]
    fn prop_string_round_trip(value in "[ -~]{0,12}") {
        let back = round_trip(
            ConcreteValue::String(format!("{value}_")),
            ConcreteValue::String(value.clone()),
        );
        prop_assert_eq!(back, Some(ConcreteValue::String(value)));
    }
}
