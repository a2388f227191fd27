//! Search engine and expansion loop.
//!
//! # Lifecycle
//!
//! ```text
//! Ready ──first step──▶ Running ──goal──▶ Solved
//!                          └──frontier empty──▶ Exhausted
//! ```
//!
//! `Solved` and `Exhausted` are terminal until [`SearchEngine::reset_state`].
//!
//! # Expansion rule
//!
//! A state is marked visited when it is expanded. Successors already in the
//! visited set are counted in `generated_nodes` but not enqueued. A node
//! popped after its state was expanded through another path is skipped
//! without counting.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, trace, warn};
use octile_kernel::board::moves::successors;
use octile_kernel::board::state::{Fingerprint, PuzzleState};
use octile_kernel::heuristic::manhattan_distance;

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{FrontierEntry, NodeArena, NodeId, SearchNode};
use crate::policy::Strategy;
use crate::stats::SearchStats;

/// Where an engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineStatus {
    /// Constructed or reset; nothing examined yet.
    Ready,
    /// At least one step taken, no termination yet.
    Running,
    /// The goal was reached.
    Solved,
    /// The frontier emptied without reaching the goal.
    Exhausted,
}

impl EngineStatus {
    /// `Solved` or `Exhausted`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        }
    }
}

impl std::fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a completed search ended.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached; `solution_depth` counts nodes on the path.
    Solved { solution_depth: u32 },
    /// The frontier emptied first.
    Exhausted,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

/// Search over 8-puzzle boards with an injected frontier policy.
///
/// The same engine runs every strategy; only `F` changes. Use
/// [`SearchEngine::for_strategy`] for the built-in policies.
pub struct SearchEngine<F: Frontier = Box<dyn Frontier>> {
    initial: PuzzleState,
    frontier: F,
    arena: NodeArena,
    visited: HashSet<Fingerprint>,
    stats: SearchStats,
    status: EngineStatus,
    started_at: Option<Instant>,
    optimal_path: Vec<PuzzleState>,
}

impl SearchEngine<Box<dyn Frontier>> {
    /// Engine for one of the built-in strategies.
    #[must_use]
    pub fn for_strategy(initial: PuzzleState, strategy: Strategy) -> Self {
        Self::new(initial, strategy.frontier())
    }
}

impl<F: Frontier> SearchEngine<F> {
    /// Engine in `Ready` state. Any entries already in `frontier` are dropped.
    pub fn new(initial: PuzzleState, mut frontier: F) -> Self {
        frontier.clear();
        Self {
            initial,
            frontier,
            arena: NodeArena::new(),
            visited: HashSet::new(),
            stats: SearchStats::default(),
            status: EngineStatus::Ready,
            started_at: None,
            optimal_path: Vec::new(),
        }
    }

    /// Run until the goal is reached or the frontier empties.
    ///
    /// Continues a search already started with [`Self::advance_one_step`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AlreadyTerminated`] if the engine is `Solved`
    /// or `Exhausted`; call [`Self::reset_state`] first.
    pub fn solve(&mut self) -> Result<SearchOutcome, SearchError> {
        if self.status.is_terminal() {
            return Err(SearchError::AlreadyTerminated {
                status: self.status,
            });
        }
        debug!(
            "solve: frontier={} initial={}",
            self.frontier.name(),
            self.initial.fingerprint()
        );
        while !self.status.is_terminal() {
            self.step();
        }
        Ok(self.terminal_outcome())
    }

    /// Examine one state and return it.
    ///
    /// The first call seeds the frontier with the initial state. Nodes whose
    /// state was already expanded are skipped within the same call, so every
    /// `Some` is either the goal or a freshly expanded state. Returns `None`
    /// once the engine is terminal, including the call that finds the
    /// frontier empty.
    pub fn advance_one_step(&mut self) -> Option<PuzzleState> {
        if self.status.is_terminal() {
            warn!("advance_one_step on a {} search; reset to start over", self.status);
            return None;
        }
        self.step()
    }

    /// Clear visited set, frontier, nodes and statistics; back to `Ready`.
    pub fn reset_state(&mut self) {
        self.frontier.clear();
        self.arena.clear();
        self.visited.clear();
        self.stats = SearchStats::default();
        self.status = EngineStatus::Ready;
        self.started_at = None;
        self.optimal_path.clear();
    }

    fn step(&mut self) -> Option<PuzzleState> {
        if self.status == EngineStatus::Ready {
            self.start();
        }
        loop {
            let Some(entry) = self.frontier.pop() else {
                self.finish_exhausted();
                return None;
            };
            let Some(node) = self.arena.get(entry.node_id).copied() else {
                warn!("frontier returned unknown node {}", entry.node_id.index());
                continue;
            };
            if node.state.is_goal() {
                self.finish_solved(entry.node_id, node.depth);
                return Some(node.state);
            }
            if !self.visited.insert(node.state.fingerprint()) {
                trace!("skip {} (already expanded)", node.state.fingerprint());
                continue;
            }
            self.expand(entry.node_id, &node);
            return Some(node.state);
        }
    }

    fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.status = EngineStatus::Running;
        let root = SearchNode::root(self.initial, manhattan_distance(&self.initial));
        let root_id = self.arena.push(root);
        self.frontier.push(FrontierEntry::for_node(root_id, &root));
        self.frontier.reorder();
    }

    fn expand(&mut self, id: NodeId, node: &SearchNode) {
        self.stats.open_nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(node.depth);

        let accept_on_generation = self.frontier.tests_goal_on_generation();
        let mut generated_goal = None;
        let mut generated = 0u64;
        for next in successors(&node.state) {
            generated += 1;
            if self.visited.contains(&next.fingerprint()) {
                continue;
            }
            let child = node.child(id, next, manhattan_distance(&next));
            let child_id = self.arena.push(child);
            self.frontier.push(FrontierEntry::for_node(child_id, &child));
            if accept_on_generation && generated_goal.is_none() && next.is_goal() {
                generated_goal = Some((child_id, child.depth));
            }
        }
        self.stats.generated_nodes += generated;
        self.frontier.reorder();
        self.stats.max_nodes_in_space = self
            .stats
            .max_nodes_in_space
            .max(self.frontier.len() as u64);

        trace!(
            "expand {} depth={} g={} h={} successors={} frontier={}",
            node.state.fingerprint(),
            node.depth,
            node.g_cost,
            node.h_cost,
            generated,
            self.frontier.len()
        );

        if let Some((goal_id, depth)) = generated_goal {
            self.finish_solved(goal_id, depth);
        }
    }

    fn finish_solved(&mut self, goal_id: NodeId, depth: u32) {
        self.optimal_path = self.arena.path_from_root(goal_id);
        debug_assert_eq!(self.optimal_path.len(), depth as usize);
        self.stats.solution_depth = depth;
        self.stats.execution_time = self.elapsed();
        self.status = EngineStatus::Solved;
        debug!(
            "solved: frontier={} depth={} expanded={} generated={} in {:?}",
            self.frontier.name(),
            depth,
            self.stats.open_nodes,
            self.stats.generated_nodes,
            self.stats.execution_time
        );
    }

    fn finish_exhausted(&mut self) {
        self.stats.execution_time = self.elapsed();
        self.status = EngineStatus::Exhausted;
        warn!(
            "no solution found: frontier={} exhausted after {} expansions from {}",
            self.frontier.name(),
            self.stats.open_nodes,
            self.initial.fingerprint()
        );
    }

    fn elapsed(&self) -> std::time::Duration {
        self.started_at
            .as_ref()
            .map_or(std::time::Duration::ZERO, Instant::elapsed)
    }

    fn terminal_outcome(&self) -> SearchOutcome {
        match self.status {
            EngineStatus::Solved => SearchOutcome::Solved {
                solution_depth: self.stats.solution_depth,
            },
            _ => SearchOutcome::Exhausted,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// True once the search has terminated, whether or not the goal was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status.is_terminal()
    }

    /// True iff the goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.status == EngineStatus::Solved
    }

    #[must_use]
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// `Some` once terminal.
    #[must_use]
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.status
            .is_terminal()
            .then(|| self.terminal_outcome())
    }

    /// Root-to-goal boards; empty unless solved.
    #[must_use]
    pub fn optimal_path(&self) -> &[PuzzleState] {
        &self.optimal_path
    }

    /// Boards currently on the frontier, in the order they would be examined.
    #[must_use]
    pub fn search_queue(&self) -> Vec<PuzzleState> {
        self.frontier
            .peek_order()
            .into_iter()
            .filter_map(|id| self.arena.get(id).map(|n| n.state))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn max_nodes_in_space(&self) -> u64 {
        self.stats.max_nodes_in_space
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.stats.max_depth
    }

    #[must_use]
    pub fn solution_depth(&self) -> u32 {
        self.stats.solution_depth
    }

    #[must_use]
    pub fn generated_nodes_count(&self) -> u64 {
        self.stats.generated_nodes
    }

    #[must_use]
    pub fn open_nodes_count(&self) -> u64 {
        self.stats.open_nodes
    }

    /// Wall clock from the first step to termination; zero before that.
    #[must_use]
    pub fn execution_time(&self) -> std::time::Duration {
        self.stats.execution_time
    }

    #[must_use]
    pub fn initial_state(&self) -> &PuzzleState {
        &self.initial
    }

    /// Name of the frontier policy in use.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.frontier.name()
    }

    /// Number of nodes generated and kept (the arena size).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of distinct states expanded so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
