//! Distance estimate from a board to the goal.

use crate::board::state::{PuzzleState, CELL_COUNT, GOAL_SYMBOLS, GRID_WIDTH};

/// Goal cell of each symbol, indexed by symbol.
const GOAL_INDEX: [usize; CELL_COUNT] = goal_index_table();

const fn goal_index_table() -> [usize; CELL_COUNT] {
    let mut table = [0; CELL_COUNT];
    let mut i = 0;
    while i < CELL_COUNT {
        table[GOAL_SYMBOLS[i] as usize] = i;
        i += 1;
    }
    table
}

/// Sum of row and column offsets between each symbol and its goal cell.
///
/// The blank's own offset is included. This differs from the textbook
/// heuristic, which skips the blank; search statistics depend on the exact
/// value, so keep the blank term.
#[must_use]
pub fn manhattan_distance(state: &PuzzleState) -> u32 {
    state
        .cells()
        .iter()
        .enumerate()
        .map(|(index, &symbol)| {
            let goal = GOAL_INDEX[usize::from(symbol)];
            let rows = (index / GRID_WIDTH).abs_diff(goal / GRID_WIDTH);
            let cols = (index % GRID_WIDTH).abs_diff(goal % GRID_WIDTH);
            rows + cols
        })
        .sum::<usize>()
        .try_into()
        .unwrap_or(u32::MAX)
}
