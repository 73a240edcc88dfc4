//! Which table rows are currently expanded.

use std::collections::HashSet;
use std::hash::Hash;

/// The set of expanded row ids for a collapsible table.
///
/// `toggle` flips membership, so toggling the same id twice restores the
/// set exactly.
#[derive(Debug, Clone, Default)]
pub struct Expansion<T> {
    expanded: HashSet<T>,
}

impl<T: Eq + Hash> Expansion<T> {
    /// Empty expansion state; every row starts collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }

    /// Flip one row between expanded and collapsed.
    pub fn toggle(&mut self, id: T) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Whether a row is currently expanded.
    pub fn is_expanded(&self, id: &T) -> bool {
        self.expanded.contains(id)
    }
}
