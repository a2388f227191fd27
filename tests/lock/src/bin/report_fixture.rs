//! Binary that runs the fixture boards through the harness and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `report_fixture`
//!
//! Output: one `key=value` line per board and strategy, then one line
//! with a stepwise frame digest.

use lock_tests::boards;
use octile_harness::policy::RunConfig;
use octile_harness::runner::run;
use octile_search::policy::Strategy;

fn main() {
    for board in [boards::ONE_MOVE, boards::THREE_MOVES, boards::SIX_MOVES] {
        for strategy in Strategy::ALL {
            let report = run(board.state(), &RunConfig::with_strategy(strategy))
                .expect("fixture run failed");
            println!(
                "board={} strategy={} status={} depth={} generated={} open={} peak={} digest={}",
                board.name,
                strategy,
                report.status.as_str(),
                report.solution_depth,
                report.generated_nodes,
                report.open_nodes,
                report.max_nodes_in_space,
                report.digest
            );
        }
    }

    let config = RunConfig {
        strategy: Strategy::AStar,
        step_budget: Some(8),
        record_frames: true,
    };
    let report = run(boards::SIX_MOVES.state(), &config).expect("stepwise fixture run failed");
    println!(
        "board={} stepwise status={} steps={} frames_digest={} digest={}",
        boards::SIX_MOVES.name,
        report.status.as_str(),
        report.steps,
        report.frames_digest.as_deref().unwrap_or("none"),
        report.digest
    );
}
