//! Strategy selection: which frontier policy a search runs with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, PriorityKey};

/// The four built-in search strategies.
///
/// | Strategy | Frontier | Shortest path |
/// |---|---|---|
/// | `BreadthFirst` | FIFO | yes |
/// | `DepthFirst` | LIFO | no |
/// | `AStar` | `g + h` ascending | when `h` never overestimates |
/// | `GreedyBestFirst` | `h` ascending | no |
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Strategy {
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[serde(rename = "dfs")]
    DepthFirst,
    #[default]
    #[serde(rename = "astar")]
    AStar,
    #[serde(rename = "greedy")]
    GreedyBestFirst,
}

impl Strategy {
    /// Every strategy, uninformed first.
    pub const ALL: [Strategy; 4] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::AStar,
        Self::GreedyBestFirst,
    ];

    /// Short name (`bfs`, `dfs`, `astar`, `greedy`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::AStar => "astar",
            Self::GreedyBestFirst => "greedy",
        }
    }

    /// Whether the strategy consults the heuristic.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::AStar | Self::GreedyBestFirst)
    }

    /// A fresh, empty frontier implementing this strategy.
    #[must_use]
    pub fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Self::BreadthFirst => Box::new(FifoFrontier::new()),
            Self::DepthFirst => Box::new(LifoFrontier::new()),
            Self::AStar => Box::new(PriorityFrontier::new(PriorityKey::PathPlusHeuristic)),
            Self::GreedyBestFirst => Box::new(PriorityFrontier::new(PriorityKey::HeuristicOnly)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "greedy" | "greedy-best-first" | "best-first" => Ok(Self::GreedyBestFirst),
            _ => Err(SearchError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
