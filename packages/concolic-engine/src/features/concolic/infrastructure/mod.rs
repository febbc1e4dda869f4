//! Concolic Infrastructure
//!
//! [`SymbolicState`] and the operation families implemented on it:
//!
//! - `constants` - literal wrapping
//! - `operators` - binary/unary operators, boolean coercion
//! - `fields` - string/array reads, array writes
//! - `search` - generational search over the path condition
//! - `solution` - model read-back into input maps

mod constants;
mod fields;
mod operators;
pub mod search;
pub mod solution;
mod symbolic_state;

pub use fields::MAX_ARRAY_INDEX;
pub use search::GenerationalSearch;
pub use solution::SolutionExtractor;
pub use symbolic_state::SymbolicState;
