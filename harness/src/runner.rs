//! Harness runner: build an engine, drive it, package a [`SearchReport`].
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::validate() → SearchEngine::for_strategy()
//!   → solve()            (no budget, no frames)
//!   → StepDriver         (budget or frames)
//!   → SearchReport::from_engine() → digest
//! ```

use log::info;

use octile_kernel::board::state::PuzzleState;
use octile_kernel::proof::canon::CanonError;
use octile_search::error::SearchError;
use octile_search::policy::Strategy;
use octile_search::search::{SearchEngine, SearchOutcome};

use crate::driver::{DriveEnd, StepDriver};
use crate::policy::{RunConfig, RunConfigError};
use crate::report::{RunStatus, SearchReport};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The configuration was rejected before the run started.
    Config(RunConfigError),
    /// The engine refused a command.
    Search(SearchError),
    /// The report digest could not be computed.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid run config: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::Canon(e) => write!(f, "report digest failed: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<RunConfigError> for RunError {
    fn from(e: RunConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Run one search as configured.
///
/// Without a budget or frame recording this calls `solve()` directly;
/// otherwise it goes through [`run_stepwise`].
///
/// # Errors
///
/// Returns [`RunError`] for an invalid config or a failed digest.
pub fn run(initial: PuzzleState, config: &RunConfig) -> Result<SearchReport, RunError> {
    config.validate()?;
    if config.is_stepwise() {
        return run_stepwise(initial, config);
    }
    let mut engine = SearchEngine::for_strategy(initial, config.strategy);
    let status = match engine.solve()? {
        SearchOutcome::Solved { .. } => RunStatus::Solved,
        SearchOutcome::Exhausted => RunStatus::Exhausted,
    };
    let report = SearchReport::from_engine(&engine, config.strategy, status, 0, None)?;
    log_report(&report);
    Ok(report)
}

/// Run one search through [`StepDriver`], honoring the step budget and
/// recording frames when asked.
///
/// # Errors
///
/// Returns [`RunError`] for an invalid config or a failed digest.
pub fn run_stepwise(initial: PuzzleState, config: &RunConfig) -> Result<SearchReport, RunError> {
    config.validate()?;
    let engine = SearchEngine::for_strategy(initial, config.strategy);
    let mut driver = StepDriver::new(engine, config.step_budget, config.record_frames);
    let status = match driver.run_to_end() {
        DriveEnd::Finished(SearchOutcome::Solved { .. }) => RunStatus::Solved,
        DriveEnd::Finished(SearchOutcome::Exhausted) => RunStatus::Exhausted,
        DriveEnd::BudgetSpent => RunStatus::BudgetExhausted,
    };
    let frames = driver.frames().map(<[_]>::to_vec);
    let report = SearchReport::from_engine(
        driver.engine(),
        config.strategy,
        status,
        driver.steps(),
        frames,
    )?;
    log_report(&report);
    Ok(report)
}

/// Run every strategy on the same board with default limits.
///
/// Reports come back in [`Strategy::ALL`] order.
///
/// # Errors
///
/// Returns the first [`RunError`] encountered.
pub fn compare(initial: PuzzleState) -> Result<Vec<SearchReport>, RunError> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| run(initial, &RunConfig::with_strategy(strategy)))
        .collect()
}

fn log_report(report: &SearchReport) {
    info!(
        "{} {}: depth={} generated={} expanded={} peak_frontier={} in {}us",
        report.strategy,
        report.status.as_str(),
        report.solution_depth,
        report.generated_nodes,
        report.open_nodes,
        report.max_nodes_in_space,
        report.execution_time_us
    );
}
