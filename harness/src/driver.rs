//! Stepwise driver: calls [`SearchEngine::advance_one_step`] under a budget.
//!
//! This is the external scheduler the engine is designed for. It owns the
//! step budget and, optionally, a frame log of every examined state.
//!
//! # Frame log digest
//!
//! ```text
//! frames_digest = canonical_hash(StepFrames, canonical_json_bytes([frame, ...]))
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use octile_kernel::board::state::PuzzleState;
use octile_kernel::proof::canon::{canonical_json_bytes, CanonError};
use octile_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use octile_search::frontier::Frontier;
use octile_search::search::{SearchEngine, SearchOutcome};

/// One examined state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFrame {
    /// 1-based step call that produced this frame.
    pub step: u64,
    /// Fingerprint of the examined board (`"123456780"` form).
    pub fingerprint: String,
    /// Frontier size after the step.
    pub frontier_len: u64,
}

/// How a driven run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveEnd {
    /// The engine terminated on its own.
    Finished(SearchOutcome),
    /// The budget ran out first; the engine is still `Running`.
    BudgetSpent,
}

/// Drives a [`SearchEngine`] one step at a time.
pub struct StepDriver<F: Frontier = Box<dyn Frontier>> {
    engine: SearchEngine<F>,
    budget: Option<u64>,
    steps: u64,
    frames: Option<Vec<StepFrame>>,
}

impl<F: Frontier> StepDriver<F> {
    /// Driver over `engine`. `budget` caps calls to `advance_one_step`.
    pub fn new(engine: SearchEngine<F>, budget: Option<u64>, record_frames: bool) -> Self {
        Self {
            engine,
            budget,
            steps: 0,
            frames: record_frames.then(Vec::new),
        }
    }

    /// Take one step unless the engine is terminal or the budget is spent.
    ///
    /// Returns `Ok(state)` for an examined state and `Err(end)` once the run
    /// cannot continue.
    pub fn step(&mut self) -> Result<PuzzleState, DriveEnd> {
        if let Some(outcome) = self.engine.outcome() {
            return Err(DriveEnd::Finished(outcome));
        }
        if self.budget.is_some_and(|b| self.steps >= b) {
            return Err(DriveEnd::BudgetSpent);
        }
        self.steps += 1;
        match self.engine.advance_one_step() {
            Some(state) => {
                if let Some(frames) = &mut self.frames {
                    frames.push(StepFrame {
                        step: self.steps,
                        fingerprint: state.fingerprint().to_string(),
                        frontier_len: self.engine.search_queue().len() as u64,
                    });
                }
                Ok(state)
            }
            None => Err(self.engine.outcome().map_or(DriveEnd::BudgetSpent, DriveEnd::Finished)),
        }
    }

    /// Step until the engine terminates or the budget is spent.
    pub fn run_to_end(&mut self) -> DriveEnd {
        loop {
            if let Err(end) = self.step() {
                debug!(
                    "driver stopped after {} steps: {end:?} (frontier={})",
                    self.steps,
                    self.engine.strategy_name()
                );
                return end;
            }
        }
    }

    /// Number of `advance_one_step` calls made so far.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Recorded frames, if recording was requested.
    #[must_use]
    pub fn frames(&self) -> Option<&[StepFrame]> {
        self.frames.as_deref()
    }

    #[must_use]
    pub fn engine(&self) -> &SearchEngine<F> {
        &self.engine
    }

    /// Release the engine (for example to finish it with `solve`).
    pub fn into_engine(self) -> SearchEngine<F> {
        self.engine
    }
}

/// Digest of a frame log.
///
/// # Errors
///
/// Returns [`CanonError`] if the frames cannot be written as canonical JSON.
pub fn frames_digest(frames: &[StepFrame]) -> Result<ContentHash, CanonError> {
    let value = serde_json::to_value(frames).map_err(|e| CanonError::Write {
        detail: e.to_string(),
    })?;
    let bytes = canonical_json_bytes(&value)?;
    Ok(canonical_hash(HashDomain::StepFrames, &bytes))
}
