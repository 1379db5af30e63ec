use std::fmt;
use std::ops::AddAssign;

/// Node counters for one top-level search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    nodes_generated: usize,
    nodes_evaluated: usize,
    nodes_pruned: usize,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call into the search, the root included.
    pub fn nodes_generated(&self) -> usize {
        self.nodes_generated
    }

    /// Leaves handed to the evaluator.
    pub fn nodes_evaluated(&self) -> usize {
        self.nodes_evaluated
    }

    /// Alpha-beta cutoff events. Always zero for minimax.
    pub fn nodes_pruned(&self) -> usize {
        self.nodes_pruned
    }

    #[inline]
    pub(crate) fn increment_generated(&mut self) {
        self.nodes_generated += 1;
    }

    #[inline]
    pub(crate) fn increment_evaluated(&mut self) {
        self.nodes_evaluated += 1;
    }

    #[inline]
    pub(crate) fn increment_pruned(&mut self) {
        self.nodes_pruned += 1;
    }
}

impl AddAssign for SearchMetrics {
    fn add_assign(&mut self, other: Self) {
        self.nodes_generated += other.nodes_generated;
        self.nodes_evaluated += other.nodes_evaluated;
        self.nodes_pruned += other.nodes_pruned;
    }
}

impl fmt::Display for SearchMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generated: {}, evaluated: {}, pruned: {}",
            self.nodes_generated, self.nodes_evaluated, self.nodes_pruned
        )
    }
}
