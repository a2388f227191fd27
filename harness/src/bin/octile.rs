//! `octile`: solve 8-puzzle boards from the command line.
//!
//! Exit status: 0 solved, 2 exhausted or out of budget, 1 on bad input.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use octile_harness::policy::RunConfig;
use octile_harness::report::SearchReport;
use octile_harness::runner::{compare, run};
use octile_kernel::board::state::PuzzleState;
use octile_search::policy::Strategy;

#[derive(Parser)]
#[command(name = "octile")]
#[command(about = "Uninformed and informed search over 8-puzzle boards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one board and print the JSON report
    Solve {
        /// Board as 9 digits, 0 or _ for the blank (e.g. 123456708)
        board: String,

        /// Search strategy (bfs, dfs, astar, greedy)
        #[arg(short, long, default_value_t = Strategy::AStar)]
        strategy: Strategy,

        /// Stop after this many single steps
        #[arg(long)]
        step_budget: Option<u64>,

        /// Include one frame per examined state
        #[arg(long)]
        frames: bool,
    },

    /// Solve one board with every strategy
    Compare {
        /// Board as 9 digits, 0 or _ for the blank
        board: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match execute(cli.command) {
        Ok(reports) => {
            if reports.iter().all(SearchReport::is_solved) {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(1)
        }
    }
}

fn execute(command: Commands) -> Result<Vec<SearchReport>, String> {
    let reports = match command {
        Commands::Solve {
            board,
            strategy,
            step_budget,
            frames,
        } => {
            let config = RunConfig {
                strategy,
                step_budget,
                record_frames: frames,
            };
            vec![run(parse_board(&board)?, &config).map_err(|e| e.to_string())?]
        }
        Commands::Compare { board } => {
            compare(parse_board(&board)?).map_err(|e| e.to_string())?
        }
    };
    for report in &reports {
        let json = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
        println!("{json}");
    }
    Ok(reports)
}

fn parse_board(text: &str) -> Result<PuzzleState, String> {
    let state: PuzzleState = text.parse().map_err(|e| format!("bad board {text:?}: {e}"))?;
    if !state.is_solvable() {
        log::warn!("board {} is unsolvable; the search will exhaust", state.fingerprint());
    }
    Ok(state)
}
