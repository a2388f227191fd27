//! Counters the engine maintains while it searches.

use std::time::Duration;

/// Statistics for one search, reset together with the engine.
///
/// `generated_nodes >= open_nodes` always holds: every expansion adds its
/// successor count, duplicates included, and counts itself once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Successors produced, including ones discarded as already visited.
    pub generated_nodes: u64,
    /// Distinct states expanded.
    pub open_nodes: u64,
    /// Largest frontier size seen after an expansion batch.
    pub max_nodes_in_space: u64,
    /// Deepest expanded node (node-count depth).
    pub max_depth: u32,
    /// Depth of the goal node, or 0 if no goal was reached.
    pub solution_depth: u32,
    /// Wall clock from the first step to termination.
    pub execution_time: Duration,
}

impl SearchStats {
    /// Copy with `execution_time` zeroed, for comparing runs.
    #[must_use]
    pub fn without_timing(&self) -> Self {
        Self {
            execution_time: Duration::ZERO,
            ..*self
        }
    }
}
