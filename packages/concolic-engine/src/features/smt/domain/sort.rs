//! Term Sort Model
//!
//! Sorts of the solver terms the engine builds. `Int` never models a
//! language value directly: it is used for lengths and indices only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Solver sort of a term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermSort {
    Bool,
    /// Array lengths and indices
    Int,
    /// Every language number
    Real,
    /// Sequence of characters
    String,
    /// Int-indexed array with the given element sort
    Array(Box<TermSort>),
}

impl TermSort {
    /// Array sort with the given element sort
    pub fn array_of(elem: TermSort) -> Self {
        Self::Array(Box::new(elem))
    }

    /// Int or Real
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Real)
    }

    /// Element sort of an array sort
    pub fn element(&self) -> Option<&TermSort> {
        match self {
            Self::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Sort two numeric operands are unified to: Int only if both are Int
    pub fn unify_numeric(&self, other: &TermSort) -> Option<TermSort> {
        match (self, other) {
            (Self::Int, Self::Int) => Some(Self::Int),
            (a, b) if a.is_numeric() && b.is_numeric() => Some(Self::Real),
            _ => None,
        }
    }
}

impl fmt::Display for TermSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Int => write!(f, "Int"),
            Self::Real => write!(f, "Real"),
            Self::String => write!(f, "String"),
            Self::Array(elem) => write!(f, "(Array Int {})", elem),
        }
    }
}
