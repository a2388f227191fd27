//! Fixture boards with known shortest solutions, plus path checks.
//!
//! Depths use the node-count convention: a board one move from the goal
//! has `solution_depth == 2`.

use octile_kernel::board::moves::is_adjacent_swap;
use octile_kernel::board::state::PuzzleState;

/// A named board and its shortest solution depth.
#[derive(Debug, Clone, Copy)]
pub struct FixtureBoard {
    pub name: &'static str,
    pub cells: [u8; 9],
    pub shortest_depth: u32,
}

impl FixtureBoard {
    /// The board as a state.
    ///
    /// # Panics
    ///
    /// Panics if the fixture cells are not a permutation.
    #[must_use]
    pub fn state(&self) -> PuzzleState {
        PuzzleState::new(self.cells).expect("fixture board is a permutation")
    }
}

pub const GOAL: FixtureBoard = FixtureBoard {
    name: "goal",
    cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    shortest_depth: 1,
};

pub const ONE_MOVE: FixtureBoard = FixtureBoard {
    name: "one_move",
    cells: [1, 2, 3, 4, 5, 6, 7, 0, 8],
    shortest_depth: 2,
};

pub const TWO_MOVES: FixtureBoard = FixtureBoard {
    name: "two_moves",
    cells: [1, 2, 3, 4, 5, 6, 0, 7, 8],
    shortest_depth: 3,
};

pub const CENTRE_BLANK: FixtureBoard = FixtureBoard {
    name: "centre_blank",
    cells: [1, 2, 3, 4, 0, 6, 7, 5, 8],
    shortest_depth: 3,
};

pub const THREE_MOVES: FixtureBoard = FixtureBoard {
    name: "three_moves",
    cells: [1, 2, 3, 0, 4, 6, 7, 5, 8],
    shortest_depth: 4,
};

pub const SIX_MOVES: FixtureBoard = FixtureBoard {
    name: "six_moves",
    cells: [4, 1, 3, 7, 2, 6, 0, 5, 8],
    shortest_depth: 7,
};

/// Every fixture. Depth-first search solves all of them, usually with a
/// path far longer than `shortest_depth`.
pub const ALL: [FixtureBoard; 6] = [GOAL, ONE_MOVE, TWO_MOVES, CENTRE_BLANK, THREE_MOVES, SIX_MOVES];

/// Check that `path` starts at `initial`, ends at the goal, and that each
/// step is a single blank swap.
///
/// # Panics
///
/// Panics with the offending index if any of those fail.
pub fn assert_valid_path(initial: &PuzzleState, path: &[PuzzleState]) {
    assert_eq!(path.first(), Some(initial), "path does not start at the initial board");
    assert_eq!(path.last(), Some(&PuzzleState::GOAL), "path does not end at the goal");
    for (i, pair) in path.windows(2).enumerate() {
        assert!(
            is_adjacent_swap(&pair[0], &pair[1]),
            "step {i} is not a single blank swap: {} -> {}",
            pair[0].fingerprint(),
            pair[1].fingerprint()
        );
    }
}
