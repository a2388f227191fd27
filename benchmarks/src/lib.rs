//! Shared helpers for octile benchmark suites.

use octile_kernel::board::state::PuzzleState;
use octile_kernel::proof::canon::canonical_json_bytes;
use octile_search::policy::Strategy;
use octile_search::search::SearchEngine;
use octile_search::stats::SearchStats;

/// A benchmark board plus the strategies that finish on it in reasonable time.
pub struct Regime {
    pub name: &'static str,
    pub board: PuzzleState,
    pub strategies: &'static [Strategy],
}

/// Strategies that stay shallow on every regime below.
const BOUNDED: &[Strategy] = &[
    Strategy::BreadthFirst,
    Strategy::AStar,
    Strategy::GreedyBestFirst,
];

fn board(cells: [u8; 9]) -> PuzzleState {
    // Regime boards are literals; a bad one is a typo in this file.
    PuzzleState::new(cells).unwrap_or_else(|e| panic!("regime board {cells:?}: {e}"))
}

/// Benchmark regimes, easiest first.
///
/// `six_moves` is also solved by depth-first search in a handful of steps.
/// `hard` is 31 moves from the goal and only runs informed search plus BFS.
///
/// # Panics
///
/// Panics if a regime board literal is not a permutation.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "three_moves",
            board: board([1, 2, 3, 0, 4, 6, 7, 5, 8]),
            strategies: BOUNDED,
        },
        Regime {
            name: "six_moves",
            board: board([4, 1, 3, 7, 2, 6, 0, 5, 8]),
            strategies: &Strategy::ALL,
        },
        Regime {
            name: "hard",
            board: board([8, 6, 7, 2, 5, 4, 3, 0, 1]),
            strategies: BOUNDED,
        },
    ]
}

/// Solve from scratch and return the counters.
///
/// # Panics
///
/// Panics if the engine refuses to solve, which a fresh engine never does.
#[must_use]
pub fn solve_once(board: PuzzleState, strategy: Strategy) -> SearchStats {
    let mut engine = SearchEngine::for_strategy(board, strategy);
    let _ = engine.solve().expect("fresh engine solves");
    *engine.stats()
}

/// Canonical bytes of a report basis, for digest-only timings.
///
/// # Panics
///
/// Panics if the basis contains a float, which report bases never do.
#[must_use]
pub fn basis_bytes(basis: &serde_json::Value) -> Vec<u8> {
    canonical_json_bytes(basis).expect("report basis is canonical")
}
