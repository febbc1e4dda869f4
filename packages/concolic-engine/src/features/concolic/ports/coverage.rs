//! Coverage Port

use crate::features::concolic::domain::BranchId;
use std::cell::Cell;
use std::rc::Rc;

/// Source of the branch id attached to each path-condition entry
pub trait CoverageTracker {
    /// Id of the branch executed most recently, if any
    fn last_branch_id(&self) -> Option<BranchId>;
}

/// Tracker for runs without coverage bookkeeping
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCoverage;

impl CoverageTracker for NoCoverage {
    fn last_branch_id(&self) -> Option<BranchId> {
        None
    }
}

/// Cursor shared between the interpreter (writer) and the engine (reader)
#[derive(Debug, Clone, Default)]
pub struct SharedCoverage {
    last: Rc<Cell<Option<BranchId>>>,
}

impl SharedCoverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` just executed
    pub fn record(&self, id: BranchId) {
        self.last.set(Some(id));
    }

    pub fn clear(&self) {
        self.last.set(None);
    }
}

impl CoverageTracker for SharedCoverage {
    fn last_branch_id(&self) -> Option<BranchId> {
        self.last.get()
    }
}

impl<T: CoverageTracker + ?Sized> CoverageTracker for &T {
    fn last_branch_id(&self) -> Option<BranchId> {
        (**self).last_branch_id()
    }
}
