//! Concolic Value Model
//!
//! A [`ConcolicValue`] pairs the concrete value the program actually computes
//! with an optional solver term. The concrete half is always present; the
//! symbolic half exists only for values derived from a symbolic input.

use crate::features::smt::{Term, TermSort};
use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Concrete Values
// ═══════════════════════════════════════════════════════════════════════════

/// Language-level value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ConcreteValue {
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<ConcreteValue>),
    Null,
    Undefined,
}

/// Tag of a [`ConcreteValue`], used for operator and field dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcreteKind {
    Boolean,
    Number,
    String,
    Array,
    Null,
    Undefined,
}

impl ConcreteKind {
    /// Solver sort for scalars of this kind
    pub fn sort(self) -> Option<TermSort> {
        match self {
            Self::Boolean => Some(TermSort::Bool),
            Self::Number => Some(TermSort::Real),
            Self::String => Some(TermSort::String),
            Self::Array | Self::Null | Self::Undefined => None,
        }
    }
}

impl fmt::Display for ConcreteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Null => "null",
            Self::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}

impl ConcreteValue {
    pub fn kind(&self) -> ConcreteKind {
        match self {
            Self::Boolean(_) => ConcreteKind::Boolean,
            Self::Number(_) => ConcreteKind::Number,
            Self::String(_) => ConcreteKind::String,
            Self::Array(_) => ConcreteKind::Array,
            Self::Null => ConcreteKind::Null,
            Self::Undefined => ConcreteKind::Undefined,
        }
    }

    /// `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ConcreteValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric value when it is a whole number
    pub fn as_integer(&self) -> Option<f64> {
        self.as_number().filter(|n| n.is_finite() && n.fract() == 0.0)
    }

    /// Truthiness: `false`, `0`, `NaN`, `""`, `null` and `undefined` are falsy
    pub fn truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) => true,
            Self::Null | Self::Undefined => false,
        }
    }

    /// Kind shared by every element, `None` for mixed arrays.
    ///
    /// Empty arrays report `Some(None)`: homogeneous, element kind unknown.
    pub fn homogeneous_elements(&self) -> Option<Option<ConcreteKind>> {
        let items = self.as_array()?;
        let Some(first) = items.first() else {
            return Some(None);
        };
        let kind = first.kind();
        items
            .iter()
            .all(|item| item.kind() == kind)
            .then_some(Some(kind))
    }
}

impl fmt::Display for ConcreteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => write!(f, "{:?}", s),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Null => write!(f, "null"),
            Self::Undefined => write!(f, "undefined"),
        }
    }
}

impl From<bool> for ConcreteValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for ConcreteValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ConcreteValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConcreteValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<ConcreteValue>> From<Vec<T>> for ConcreteValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Symbolic Values
// ═══════════════════════════════════════════════════════════════════════════

/// Symbolic array: element term, current length term and a write counter.
///
/// Each mutating write bumps `version` and mints a fresh length constant
/// `{name}_Length_{version}`, so a length observed before a write is never
/// confused with the length after it.
#[derive(Debug, Clone)]
pub struct ArraySymbol {
    name: String,
    array: Term,
    length: Term,
    version: u32,
}

impl ArraySymbol {
    pub fn new(name: impl Into<String>, array: Term, length: Term) -> Self {
        Self {
            name: name.into(),
            array,
            length,
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current array term
    pub fn array(&self) -> &Term {
        &self.array
    }

    /// Current length term (Int)
    pub fn length(&self) -> &Term {
        &self.length
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn element_sort(&self) -> Option<&TermSort> {
        self.array.sort().element()
    }

    /// Bump the write counter and return the name for the next length constant
    pub fn next_length_name(&mut self) -> String {
        self.version += 1;
        format!("{}_Length_{}", self.name, self.version)
    }

    pub fn set_array(&mut self, array: Term) {
        self.array = array;
    }

    pub fn set_length(&mut self, length: Term) {
        self.length = length;
    }
}

/// Symbolic half of a concolic value
#[derive(Debug, Clone)]
pub enum Symbolic {
    Term(Term),
    Array(ArraySymbol),
}

impl Symbolic {
    /// Scalar term, or the array term of an array symbol
    pub fn term(&self) -> &Term {
        match self {
            Self::Term(term) => term,
            Self::Array(array) => array.array(),
        }
    }
}

impl From<Term> for Symbolic {
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

impl fmt::Display for Symbolic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Term(term) => write!(f, "{}", term),
            Self::Array(array) => write!(f, "{} (length {})", array.array(), array.length()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Concolic Values
// ═══════════════════════════════════════════════════════════════════════════

/// Concrete value with an optional symbolic shadow
#[derive(Debug, Clone)]
pub struct ConcolicValue {
    pub concrete: ConcreteValue,
    pub symbolic: Option<Symbolic>,
}

impl ConcolicValue {
    pub fn new(concrete: ConcreteValue, symbolic: Option<Symbolic>) -> Self {
        Self { concrete, symbolic }
    }

    /// Concrete-only value
    pub fn concrete(concrete: impl Into<ConcreteValue>) -> Self {
        Self {
            concrete: concrete.into(),
            symbolic: None,
        }
    }

    /// Value with a scalar term, or concrete-only when `term` is `None`
    pub fn with_term(concrete: impl Into<ConcreteValue>, term: Option<Term>) -> Self {
        Self {
            concrete: concrete.into(),
            symbolic: term.map(Symbolic::Term),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        self.symbolic.is_some()
    }

    pub fn kind(&self) -> ConcreteKind {
        self.concrete.kind()
    }

    /// Symbolic term (array term for array symbols)
    pub fn term(&self) -> Option<&Term> {
        self.symbolic.as_ref().map(Symbolic::term)
    }

    pub fn array_symbol(&self) -> Option<&ArraySymbol> {
        match &self.symbolic {
            Some(Symbolic::Array(array)) => Some(array),
            _ => None,
        }
    }

    pub fn array_symbol_mut(&mut self) -> Option<&mut ArraySymbol> {
        match &mut self.symbolic {
            Some(Symbolic::Array(array)) => Some(array),
            _ => None,
        }
    }
}

impl fmt::Display for ConcolicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbolic {
            Some(symbolic) => write!(f, "{} <{}>", self.concrete, symbolic),
            None => write!(f, "{}", self.concrete),
        }
    }
}
