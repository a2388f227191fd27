//! Frontier policies: the only thing that differs between strategies.
//!
//! A frontier holds [`FrontierEntry`] values and decides which one the
//! engine examines next. The engine calls [`Frontier::reorder`] once after
//! every batch of pushes, which is where priority frontiers sort.

use std::collections::VecDeque;

use crate::node::{FrontierEntry, NodeId};

/// Ordering policy for generated-but-unexamined nodes.
pub trait Frontier {
    /// Short policy name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Add one entry.
    fn push(&mut self, entry: FrontierEntry);

    /// Remove the entry to examine next.
    fn pop(&mut self) -> Option<FrontierEntry>;

    /// Restore the policy order after a batch of pushes.
    fn reorder(&mut self) {}

    /// Node ids in the order [`Frontier::pop`] would return them.
    fn peek_order(&self) -> Vec<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    fn clear(&mut self);

    /// Whether a goal may be accepted as soon as it is generated.
    ///
    /// Only sound when generation order is already non-decreasing in path
    /// length, which holds for a FIFO queue under unit move cost.
    fn tests_goal_on_generation(&self) -> bool {
        false
    }
}

impl<F: Frontier + ?Sized> Frontier for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn push(&mut self, entry: FrontierEntry) {
        (**self).push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        (**self).pop()
    }

    fn reorder(&mut self) {
        (**self).reorder();
    }

    fn peek_order(&self) -> Vec<NodeId> {
        (**self).peek_order()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn tests_goal_on_generation(&self) -> bool {
        (**self).tests_goal_on_generation()
    }
}

/// First in, first out. Breadth-first search.
#[derive(Debug, Clone, Default)]
pub struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    fn peek_order(&self) -> Vec<NodeId> {
        self.queue.iter().map(|e| e.node_id).collect()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn tests_goal_on_generation(&self) -> bool {
        true
    }
}

/// Last in, first out. Depth-first search.
#[derive(Debug, Clone, Default)]
pub struct LifoFrontier {
    stack: Vec<FrontierEntry>,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn name(&self) -> &'static str {
        "lifo"
    }

    fn push(&mut self, entry: FrontierEntry) {
        self.stack.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.stack.pop()
    }

    fn peek_order(&self) -> Vec<NodeId> {
        self.stack.iter().rev().map(|e| e.node_id).collect()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// The key a [`PriorityFrontier`] sorts by, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityKey {
    /// `g + h` (A*).
    PathPlusHeuristic,
    /// `h` alone (greedy best-first).
    HeuristicOnly,
}

impl PriorityKey {
    /// Key value for one entry.
    #[must_use]
    pub fn of(self, entry: &FrontierEntry) -> u32 {
        match self {
            Self::PathPlusHeuristic => entry.f_cost(),
            Self::HeuristicOnly => entry.h_cost,
        }
    }
}

/// Sorted queue re-sorted after each push batch.
///
/// The sort is stable, so entries with equal keys leave in the order they
/// were pushed. A binary heap would pop the same keys but could break ties
/// differently.
#[derive(Debug, Clone)]
pub struct PriorityFrontier {
    queue: VecDeque<FrontierEntry>,
    key: PriorityKey,
    sorted: bool,
}

impl PriorityFrontier {
    #[must_use]
    pub fn new(key: PriorityKey) -> Self {
        Self {
            queue: VecDeque::new(),
            key,
            sorted: true,
        }
    }

    /// The key this frontier orders by.
    #[must_use]
    pub fn key(&self) -> PriorityKey {
        self.key
    }
}

impl Frontier for PriorityFrontier {
    fn name(&self) -> &'static str {
        match self.key {
            PriorityKey::PathPlusHeuristic => "priority_f",
            PriorityKey::HeuristicOnly => "priority_h",
        }
    }

    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
        self.sorted = false;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.reorder();
        self.queue.pop_front()
    }

    fn reorder(&mut self) {
        if !self.sorted {
            let key = self.key;
            self.queue.make_contiguous().sort_by_key(|e| key.of(e));
            self.sorted = true;
        }
    }

    fn peek_order(&self) -> Vec<NodeId> {
        let mut entries: Vec<&FrontierEntry> = self.queue.iter().collect();
        if !self.sorted {
            entries.sort_by_key(|e| self.key.of(e));
        }
        entries.into_iter().map(|e| e.node_id).collect()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.sorted = true;
    }
}
