//! String modeling integration tests
//!
//! Concatenation, `.length`, character indexing and numeric casts on
//! symbolic strings, plus a full exploration of a character-scanning loop.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use concolic_engine::features::concolic::{
    BinaryOp, ConcolicValue, ConcreteValue, InputMap, SymbolicState, UnaryOp,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn read_length(state: &mut SymbolicState, s: &ConcolicValue) -> ConcolicValue {
    let len = s.concrete.as_str().map_or(0, |s| s.chars().count());
    let term = state.symbolic_field(s, &ConcolicValue::concrete("length"));
    ConcolicValue::with_term(len as f64, term)
}

fn read_char(state: &mut SymbolicState, s: &ConcolicValue, index: usize) -> ConcolicValue {
    let concrete = s
        .concrete
        .as_str()
        .and_then(|s| s.chars().nth(index))
        .map_or(ConcreteValue::Undefined, |c| ConcreteValue::String(c.to_string()));
    let term = state.symbolic_field(s, &ConcolicValue::concrete(index as f64));
    ConcolicValue::with_term(concrete, term)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Scan {
    Empty,
    AllZ,
    NotAllZ,
}

// ═══════════════════════════════════════════════════════════════════════════
// Exploration
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_all_z_scan_is_fully_explored() {
    let runs = explore(InputMap::new(), 64, |state| {
        let x = state.create_symbolic_value("x", ConcreteValue::from("ab"));

        // assume(x.length < 10)
        let len = read_length(state, &x);
        let ctx = state.context();
        let limit = ctx.int_val(10).unwrap();
        let assumption = ctx.lt(len.term().unwrap(), &limit).unwrap();
        state.push_condition(assumption, true);

        if branch(state, BinaryOp::StrictEq, &len, &ConcolicValue::concrete(0.0)) {
            return Scan::Empty;
        }

        let mut i = 0;
        while branch(state, BinaryOp::Lt, &ConcolicValue::concrete(i as f64), &len) {
            let c = read_char(state, &x, i);
            if branch(state, BinaryOp::StrictNe, &c, &ConcolicValue::concrete("z")) {
                return Scan::NotAllZ;
            }
            i += 1;
        }
        Scan::AllZ
    });

    assert!(runs.len() < 64, "exploration did not converge: {} runs", runs.len());

    let outcomes: BTreeSet<Scan> = runs.iter().map(|run| run.outcome).collect();
    assert_eq!(outcomes, BTreeSet::from([Scan::Empty, Scan::AllZ, Scan::NotAllZ]));

    for run in &runs {
        let x = string(&run.input, "x");
        let len = x.chars().count();
        assert!(len < 10, "assumption violated by {x:?}");
        match run.outcome {
            Scan::Empty => assert_eq!(len, 0),
            Scan::AllZ => {
                assert!(len >= 1);
                assert!(x.chars().all(|c| c == 'z'), "{x:?}");
            }
            Scan::NotAllZ => assert!(x.chars().any(|c| c != 'z'), "{x:?}"),
        }
    }

    // Every length from 1 to 9 is reached with an all-'z' string
    let all_z_lengths: BTreeSet<usize> = runs
        .iter()
        .filter(|run| run.outcome == Scan::AllZ)
        .map(|run| string(&run.input, "x").chars().count())
        .collect();
    assert_eq!(all_z_lengths, (1..10).collect::<BTreeSet<_>>());
}

// ═══════════════════════════════════════════════════════════════════════════
// Operations
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_concat_solved_for_prefix() {
    let mut state = fresh_engine();
    let s = state.create_symbolic_value("s", ConcreteValue::from("x"));

    let joined_term = state.symbolic_binary(BinaryOp::Add, &s, &ConcolicValue::concrete("b"));
    let joined = ConcolicValue::with_term("xb", joined_term);
    assert!(!branch(&mut state, BinaryOp::StrictEq, &joined, &ConcolicValue::concrete("ab")));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(string(&alternatives[0].input, "s"), "a");
}

#[test]
fn test_length_solved() {
    let mut state = fresh_engine();
    let s = state.create_symbolic_value("s", ConcreteValue::from(""));

    let len = read_length(&mut state, &s);
    assert!(!branch(&mut state, BinaryOp::StrictEq, &len, &ConcolicValue::concrete(3.0)));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(string(&alternatives[0].input, "s").chars().count(), 3);
}

#[test]
fn test_character_index_solved() {
    let mut state = fresh_engine();
    let s = state.create_symbolic_value("s", ConcreteValue::from("abc"));

    let c = read_char(&mut state, &s, 1);
    assert!(!branch(&mut state, BinaryOp::StrictEq, &c, &ConcolicValue::concrete("q")));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(string(&alternatives[0].input, "s").chars().nth(1), Some('q'));
}

#[test]
fn test_non_printable_characters_round_trip() {
    let mut state = fresh_engine();
    let s = state.create_symbolic_value("s", ConcreteValue::from(""));

    let target = "tab\there \\ \u{7f}";
    assert!(!branch(&mut state, BinaryOp::StrictEq, &s, &ConcolicValue::concrete(target)));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(string(&alternatives[0].input, "s"), target);
}

#[test]
fn test_truthiness_of_empty_string() {
    let mut state = fresh_engine();
    let s = state.create_symbolic_value("s", ConcreteValue::from(""));
    assert!(!state.symbolic_conditional(&s));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert!(!string(&alternatives[0].input, "s").is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Numeric Casts
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_unary_plus_parses_digits() {
    let mut state = fresh_engine();
    let s = state.create_symbolic_value("s", ConcreteValue::from("5"));

    let number = ConcolicValue::with_term(5.0, state.symbolic_unary(UnaryOp::Plus, &s));
    assert!(!branch(&mut state, BinaryOp::StrictEq, &number, &ConcolicValue::concrete(42.0)));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    let parsed: f64 = string(&alternatives[0].input, "s").parse().unwrap();
    assert_eq!(parsed, 42.0);
}

#[test]
fn test_unary_minus_negates_parsed_value() {
    let mut state = fresh_engine();
    let s = state.create_symbolic_value("s", ConcreteValue::from("1"));

    let negated = ConcolicValue::with_term(-1.0, state.symbolic_unary_token("-", &s));
    assert!(!branch(&mut state, BinaryOp::StrictEq, &negated, &ConcolicValue::concrete(-7.0)));

    let alternatives = state.alternatives().unwrap();
    assert_eq!(alternatives.len(), 1);
    let parsed: f64 = string(&alternatives[0].input, "s").parse().unwrap();
    assert_eq!(parsed, 7.0);
}
