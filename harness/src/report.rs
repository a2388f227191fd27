//! Search report: the serializable record of one harness run.
//!
//! # Digest
//!
//! ```text
//! digest = canonical_hash(SearchReport, canonical_json_bytes(digest_basis))
//! ```
//!
//! The basis is every report field except `execution_time_us` and `digest`
//! itself, so two runs of the same board and configuration produce the same
//! digest in any process on any machine.

use serde::{Deserialize, Serialize};

use octile_kernel::board::state::{PuzzleState, CELL_COUNT};
use octile_kernel::proof::canon::{canonical_json_bytes, CanonError};
use octile_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use octile_search::frontier::Frontier;
use octile_search::policy::Strategy;
use octile_search::search::SearchEngine;

use crate::driver::StepFrame;

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "octile.search_report.v1";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The goal was reached.
    Solved,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The step budget ran out before the search terminated.
    BudgetExhausted,
}

impl RunStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
            Self::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub schema_version: String,
    pub strategy: Strategy,
    /// Frontier policy name (`fifo`, `lifo`, `priority_f`, `priority_h`).
    pub frontier: String,
    pub initial: [u8; CELL_COUNT],
    pub status: RunStatus,
    /// Node-count depth of the goal; 0 unless solved.
    pub solution_depth: u32,
    /// Root-to-goal boards; empty unless solved.
    pub path: Vec<[u8; CELL_COUNT]>,
    pub generated_nodes: u64,
    pub open_nodes: u64,
    pub max_nodes_in_space: u64,
    pub max_depth: u32,
    /// `advance_one_step` calls made; 0 for a run-to-completion `solve`.
    pub steps: u64,
    /// Wall clock in microseconds. Not part of the digest.
    pub execution_time_us: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<StepFrame>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames_digest: Option<String>,
    /// `sha256:<hex>` over the digest basis.
    pub digest: String,
}

impl SearchReport {
    /// Build a report from an engine that has stopped.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the digest basis cannot be serialized.
    pub fn from_engine<F: Frontier>(
        engine: &SearchEngine<F>,
        strategy: Strategy,
        status: RunStatus,
        steps: u64,
        frames: Option<Vec<StepFrame>>,
    ) -> Result<Self, CanonError> {
        let stats = engine.stats();
        let frames_digest = match &frames {
            Some(frames) => Some(crate::driver::frames_digest(frames)?.as_str().to_string()),
            None => None,
        };
        let mut report = Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            strategy,
            frontier: engine.strategy_name().to_string(),
            initial: *engine.initial_state().cells(),
            status,
            solution_depth: stats.solution_depth,
            path: engine.optimal_path().iter().map(|s| *s.cells()).collect(),
            generated_nodes: stats.generated_nodes,
            open_nodes: stats.open_nodes,
            max_nodes_in_space: stats.max_nodes_in_space,
            max_depth: stats.max_depth,
            steps,
            execution_time_us: u64::try_from(stats.execution_time.as_micros()).unwrap_or(u64::MAX),
            frames,
            frames_digest,
            digest: String::new(),
        };
        report.digest = report.compute_digest()?.as_str().to_string();
        Ok(report)
    }

    /// The fields the digest commits to.
    #[must_use]
    pub fn digest_basis(&self) -> serde_json::Value {
        serde_json::json!({
            "schema_version": self.schema_version,
            "strategy": self.strategy.as_str(),
            "frontier": self.frontier,
            "initial": self.initial,
            "status": self.status.as_str(),
            "solution_depth": self.solution_depth,
            "path": self.path,
            "generated_nodes": self.generated_nodes,
            "open_nodes": self.open_nodes,
            "max_nodes_in_space": self.max_nodes_in_space,
            "max_depth": self.max_depth,
            "steps": self.steps,
            "frames_digest": self.frames_digest,
        })
    }

    /// Recompute the digest from the current field values.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the basis cannot be serialized.
    pub fn compute_digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.digest_basis())?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }

    /// True iff `digest` matches the other fields.
    #[must_use]
    pub fn verify_digest(&self) -> bool {
        self.compute_digest()
            .is_ok_and(|d| d.as_str() == self.digest)
    }

    /// The solution path as boards.
    ///
    /// Returns `None` if any stored board is not a valid permutation, which
    /// only happens for a hand-edited report.
    #[must_use]
    pub fn path_states(&self) -> Option<Vec<PuzzleState>> {
        self.path
            .iter()
            .map(|cells| PuzzleState::new(*cells).ok())
            .collect()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == RunStatus::Solved
    }
}
