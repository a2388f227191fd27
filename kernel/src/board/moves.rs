//! Move generation: which cells the blank may swap with, and the swap itself.
//!
//! Generation order is left, right, up, down. Search frontiers that do not
//! re-sort inherit this order, so it decides which of several equally good
//! solutions is found first.

use crate::board::state::{PuzzleState, CELL_COUNT, GRID_WIDTH};

/// Swap targets reachable from one blank position, in generation order.
///
/// Holds at most four indices; corners have two, edges three, the centre four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moves {
    targets: [usize; 4],
    len: usize,
}

impl Moves {
    fn push(&mut self, target: usize) {
        self.targets[self.len] = target;
        self.len += 1;
    }

    /// The target indices.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.targets[..self.len]
    }

    /// Number of legal moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a well-formed blank index.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the targets in generation order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Cells the blank at `empty_index` can swap with.
///
/// - left (`i - 1`) unless the blank is in the first column
/// - right (`i + 1`) unless it is in the last column
/// - up (`i - 3`) unless it is in the first row
/// - down (`i + 3`) unless it is in the last row
#[must_use]
pub fn possible_moves(empty_index: usize) -> Moves {
    let mut moves = Moves {
        targets: [0; 4],
        len: 0,
    };
    if empty_index >= CELL_COUNT {
        return moves;
    }
    if empty_index % GRID_WIDTH != 0 {
        moves.push(empty_index - 1);
    }
    if empty_index % GRID_WIDTH != GRID_WIDTH - 1 {
        moves.push(empty_index + 1);
    }
    if empty_index >= GRID_WIDTH {
        moves.push(empty_index - GRID_WIDTH);
    }
    if empty_index < CELL_COUNT - GRID_WIDTH {
        moves.push(empty_index + GRID_WIDTH);
    }
    moves
}

/// Exchange the blank at `empty_index` with the tile at `target_index`.
///
/// Returns a new board; `state` is untouched, so nodes that still hold it
/// are unaffected.
///
/// # Panics
///
/// Panics if either index is `>= 9`.
#[must_use]
pub fn apply_move(state: &PuzzleState, empty_index: usize, target_index: usize) -> PuzzleState {
    debug_assert_eq!(state.empty_tile_index(), empty_index);
    state.swapped(empty_index, target_index)
}

/// Every board one move away from `state`, in generation order.
pub fn successors(state: &PuzzleState) -> impl Iterator<Item = PuzzleState> + '_ {
    let empty = state.empty_tile_index();
    let moves = possible_moves(empty);
    moves
        .targets
        .into_iter()
        .take(moves.len)
        .map(move |target| apply_move(state, empty, target))
}

/// True iff `to` is `from` with its blank swapped into one legal neighbour.
#[must_use]
pub fn is_adjacent_swap(from: &PuzzleState, to: &PuzzleState) -> bool {
    let empty = from.empty_tile_index();
    possible_moves(empty)
        .iter()
        .any(|target| apply_move(from, empty, target) == *to)
}
