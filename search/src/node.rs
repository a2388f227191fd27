//! Search nodes and the arena that owns them.
//!
//! Every node generated during one search stays in the arena until the
//! engine is reset, so any node can be walked back to the root at any time.
//! Parent links are arena indices.

use octile_kernel::board::state::PuzzleState;

/// Index of a node in its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena (also the creation order).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
///
/// `depth` counts nodes, not moves: the root has depth 1, so a one-move
/// solution has depth 2. It always equals the length of
/// [`NodeArena::path_from_root`] for this node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// Board at this node.
    pub state: PuzzleState,
    /// Parent node (`None` for root).
    pub parent: Option<NodeId>,
    /// Nodes on the path from the root, inclusive.
    pub depth: u32,
    /// Moves from the root.
    pub g_cost: u32,
    /// Heuristic estimate of the remaining distance.
    pub h_cost: u32,
}

impl SearchNode {
    /// Root node for `state`.
    #[must_use]
    pub fn root(state: PuzzleState, h_cost: u32) -> Self {
        Self {
            state,
            parent: None,
            depth: 1,
            g_cost: 0,
            h_cost,
        }
    }

    /// Child of `self` (stored at `self_id`) one move further on.
    #[must_use]
    pub fn child(&self, self_id: NodeId, state: PuzzleState, h_cost: u32) -> Self {
        Self {
            state,
            parent: Some(self_id),
            depth: self.depth + 1,
            g_cost: self.g_cost + 1,
            h_cost,
        }
    }

    /// `g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// What a frontier stores: a node reference plus the costs it may order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node_id: NodeId,
    pub g_cost: u32,
    pub h_cost: u32,
}

impl FrontierEntry {
    /// Entry for `node` stored at `node_id`.
    #[must_use]
    pub fn for_node(node_id: NodeId, node: &SearchNode) -> Self {
        Self {
            node_id,
            g_cost: node.g_cost,
            h_cost: node.h_cost,
        }
    }

    /// `g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// Append-only node storage, freed as a whole by [`NodeArena::clear`].
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node. Ids handed out before this call are invalid after it.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Boards from the root to `id`, inclusive.
    ///
    /// Returns an empty path for an id this arena never issued.
    #[must_use]
    pub fn path_from_root(&self, id: NodeId) -> Vec<PuzzleState> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|id| self.get(id)) {
            path.push(node.state);
            current = node.parent;
        }
        path.reverse();
        path
    }
}
