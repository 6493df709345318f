//! Per-call traversal state threaded through the walker.

use super::config::RecursionLimit;

/// Position of one walker call in the tree.
///
/// Passed by value to each recursive step; a child gets a new state from
/// [`Traversal::descend`] and never mutates its caller's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Traversal {
    /// Indentation level of the entries rendered by this call.
    pub depth: usize,
    /// Descents made from the root call to reach this one.
    pub recursions_done: usize,
}

impl Traversal {
    /// State for the root call.
    pub fn root() -> Self {
        Self::default()
    }

    /// Whether a directory listed by this call may be descended into.
    pub fn can_descend(self, limit: RecursionLimit) -> bool {
        limit.allows(self.recursions_done)
    }

    /// State for a child directory.
    pub fn descend(self) -> Self {
        Self {
            depth: self.depth + 1,
            recursions_done: self.recursions_done + 1,
        }
    }
}
