//! Path Condition Model

use crate::features::smt::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque branch identifier supplied by the coverage tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BranchId(pub u64);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One recorded branch decision or structural invariant
///
/// Binder entries (array lengths are non-negative, a write extends the
/// length) always hold and are never negated by the search.
#[derive(Debug, Clone)]
pub struct PathConditionEntry {
    pub term: Term,
    pub binder: bool,
    pub branch_id: Option<BranchId>,
}

impl PathConditionEntry {
    pub fn branch(term: Term, branch_id: Option<BranchId>) -> Self {
        Self {
            term,
            binder: false,
            branch_id,
        }
    }

    pub fn binder(term: Term, branch_id: Option<BranchId>) -> Self {
        Self {
            term,
            binder: true,
            branch_id,
        }
    }
}

impl fmt::Display for PathConditionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.binder {
            write!(f, "[binder] ")?;
        }
        write!(f, "{}", self.term)?;
        if let Some(id) = self.branch_id {
            write!(f, " @ {}", id)?;
        }
        Ok(())
    }
}
