//! Properties that hold for every fixture board and strategy.

use lock_tests::boards::{self, assert_valid_path};
use octile_kernel::heuristic::manhattan_distance;
use octile_search::policy::Strategy;
use octile_search::search::SearchEngine;

fn solved(board: boards::FixtureBoard, strategy: Strategy) -> SearchEngine {
    let mut engine = SearchEngine::for_strategy(board.state(), strategy);
    let outcome = engine.solve().unwrap();
    assert!(outcome.is_solved(), "{} / {strategy}", board.name);
    engine
}

#[test]
fn every_path_is_a_chain_of_blank_swaps() {
    for board in boards::ALL {
        for strategy in Strategy::ALL {
            let engine = solved(board, strategy);
            assert_valid_path(&board.state(), engine.optimal_path());
            assert_eq!(
                engine.optimal_path().len(),
                engine.solution_depth() as usize,
                "{} / {strategy}",
                board.name
            );
        }
    }
}

#[test]
fn bfs_finds_the_shortest_path() {
    for board in boards::ALL {
        let bfs = solved(board, Strategy::BreadthFirst);
        assert_eq!(bfs.solution_depth(), board.shortest_depth, "{}", board.name);
        for strategy in Strategy::ALL {
            let other = solved(board, strategy);
            assert!(
                bfs.solution_depth() <= other.solution_depth(),
                "{} / {strategy}: bfs {} > {}",
                board.name,
                bfs.solution_depth(),
                other.solution_depth()
            );
        }
    }
}

#[test]
fn astar_depth_equals_bfs_depth() {
    for board in boards::ALL {
        assert_eq!(
            solved(board, Strategy::AStar).solution_depth(),
            solved(board, Strategy::BreadthFirst).solution_depth(),
            "{}",
            board.name
        );
    }
}

#[test]
fn generated_is_at_least_open() {
    for board in boards::ALL {
        for strategy in Strategy::ALL {
            let engine = solved(board, strategy);
            assert!(
                engine.generated_nodes_count() >= engine.open_nodes_count(),
                "{} / {strategy}",
                board.name
            );
            assert!(engine.visited_count() as u64 == engine.open_nodes_count());
        }
    }
}

#[test]
fn max_depth_never_exceeds_solution_depth() {
    // Every expanded node is shallower than the goal for the FIFO frontier.
    for board in boards::ALL {
        let bfs = solved(board, Strategy::BreadthFirst);
        assert!(bfs.max_depth() < bfs.solution_depth() || bfs.open_nodes_count() == 0);
    }
}

#[test]
fn repeated_runs_are_identical() {
    for board in boards::ALL {
        for strategy in Strategy::ALL {
            let a = solved(board, strategy);
            let b = solved(board, strategy);
            assert_eq!(a.optimal_path(), b.optimal_path());
            assert_eq!(a.stats().without_timing(), b.stats().without_timing());
        }
    }
}

#[test]
fn heuristic_is_zero_only_at_goal() {
    for board in boards::ALL {
        let h = manhattan_distance(&board.state());
        assert_eq!(h == 0, board.state().is_goal(), "{}", board.name);
    }
}
