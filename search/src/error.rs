//! Typed search errors.
//!
//! `SearchError` covers misuse of the engine and bad strategy names. The
//! search itself has one runtime failure, an empty frontier, which is
//! reported as [`crate::search::SearchOutcome::Exhausted`] rather than as an
//! error.

use crate::search::EngineStatus;

/// Typed failure for engine commands and strategy selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `solve()` was called on an engine that already terminated.
    AlreadyTerminated { status: EngineStatus },
    /// A strategy name did not match any known strategy.
    UnknownStrategy { name: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyTerminated { status } => {
                write!(f, "search already terminated ({status}); reset before solving again")
            }
            Self::UnknownStrategy { name } => {
                write!(f, "unknown strategy {name:?} (expected bfs, dfs, astar or greedy)")
            }
        }
    }
}

impl std::error::Error for SearchError {}
