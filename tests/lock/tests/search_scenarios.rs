//! Golden counter values per fixture board and strategy.
//!
//! These lock the exact expansion order: goal-on-generation for the FIFO
//! frontier, left/right/up/down successor order, stable priority ties and
//! the visited rule. Any change to one of those shows up here first.

use lock_tests::boards::{self, FixtureBoard};
use octile_kernel::board::state::PuzzleState;
use octile_search::policy::Strategy;
use octile_search::search::{SearchEngine, SearchOutcome};

/// `(solution_depth, generated, open, max_nodes_in_space, max_depth)`.
type Golden = (u32, u64, u64, u64, u32);

fn solve(board: FixtureBoard, strategy: Strategy) -> SearchEngine {
    let mut engine = SearchEngine::for_strategy(board.state(), strategy);
    let outcome = engine.solve().unwrap();
    assert!(outcome.is_solved(), "{} / {strategy} did not solve", board.name);
    engine
}

fn assert_golden(board: FixtureBoard, strategy: Strategy, golden: Golden) {
    let engine = solve(board, strategy);
    let actual = (
        engine.solution_depth(),
        engine.generated_nodes_count(),
        engine.open_nodes_count(),
        engine.max_nodes_in_space(),
        engine.max_depth(),
    );
    assert_eq!(actual, golden, "{} / {strategy}", board.name);
}

#[test]
fn one_move_bfs_scenario() {
    let mut engine = SearchEngine::for_strategy(boards::ONE_MOVE.state(), Strategy::BreadthFirst);
    assert_eq!(
        engine.solve().unwrap(),
        SearchOutcome::Solved { solution_depth: 2 }
    );
    assert_eq!(
        engine.optimal_path(),
        &[boards::ONE_MOVE.state(), PuzzleState::GOAL]
    );
    assert_eq!(engine.solution_depth(), 2);
    assert_eq!(engine.generated_nodes_count(), 3);
    assert_eq!(engine.open_nodes_count(), 1);
}

#[test]
fn one_move_informed_strategies_match_bfs() {
    for strategy in [Strategy::AStar, Strategy::GreedyBestFirst] {
        assert_golden(boards::ONE_MOVE, strategy, (2, 3, 1, 3, 1));
    }
}

#[test]
fn one_move_dfs_wanders() {
    assert_golden(boards::ONE_MOVE, Strategy::DepthFirst, (30, 83, 29, 27, 29));
}

#[test]
fn two_moves_goldens() {
    for strategy in [Strategy::BreadthFirst, Strategy::AStar, Strategy::GreedyBestFirst] {
        assert_golden(boards::TWO_MOVES, strategy, (3, 5, 2, 3, 2));
    }
}

#[test]
fn centre_blank_goldens() {
    assert_golden(boards::CENTRE_BLANK, Strategy::BreadthFirst, (3, 16, 5, 8, 2));
    for strategy in [Strategy::DepthFirst, Strategy::AStar, Strategy::GreedyBestFirst] {
        assert_golden(boards::CENTRE_BLANK, strategy, (3, 7, 2, 5, 2));
    }
}

#[test]
fn three_moves_goldens() {
    assert_golden(boards::THREE_MOVES, Strategy::BreadthFirst, (4, 20, 7, 8, 3));
    assert_golden(boards::THREE_MOVES, Strategy::AStar, (4, 10, 3, 6, 3));
    assert_golden(boards::THREE_MOVES, Strategy::GreedyBestFirst, (4, 10, 3, 6, 3));
}

#[test]
fn six_moves_goldens() {
    assert_golden(boards::SIX_MOVES, Strategy::BreadthFirst, (7, 140, 51, 40, 6));
    assert_golden(boards::SIX_MOVES, Strategy::DepthFirst, (7, 17, 6, 7, 6));
    assert_golden(boards::SIX_MOVES, Strategy::AStar, (7, 31, 11, 11, 6));
    assert_golden(boards::SIX_MOVES, Strategy::GreedyBestFirst, (7, 37, 13, 13, 6));
}

#[test]
fn goal_board_needs_no_expansion() {
    for strategy in Strategy::ALL {
        assert_golden(boards::GOAL, strategy, (1, 0, 0, 0, 0));
    }
}

#[test]
fn hard_board_astar_matches_bfs_depth() {
    // 31 moves; near the 8-puzzle diameter.
    let hard = PuzzleState::new([8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
    let mut astar = SearchEngine::for_strategy(hard, Strategy::AStar);
    assert_eq!(
        astar.solve().unwrap(),
        SearchOutcome::Solved { solution_depth: 32 }
    );
    assert_eq!(astar.generated_nodes_count(), 54201);
    assert_eq!(astar.open_nodes_count(), 20223);

    let mut bfs = SearchEngine::for_strategy(hard, Strategy::BreadthFirst);
    assert_eq!(
        bfs.solve().unwrap(),
        SearchOutcome::Solved { solution_depth: 32 }
    );
    assert_eq!(bfs.generated_nodes_count(), 483_752);
    assert_eq!(bfs.open_nodes_count(), 181_410);
}
