//! Run configuration: which strategy runs and under what limits.
//!
//! The engine itself imposes no limits. Budgets belong to whoever drives
//! it, so they live here and are enforced by [`crate::driver::StepDriver`].

use octile_search::policy::Strategy;

/// Parameters for one harness run.
///
/// `Default` is A* with no step budget and no frame recording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Frontier policy to search with.
    pub strategy: Strategy,
    /// Maximum number of single-step calls. `None` runs to termination.
    pub step_budget: Option<u64>,
    /// Record one frame per examined state.
    pub record_frames: bool,
}

/// Rejected run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunConfigError {
    /// A budget of zero steps can never examine the initial state.
    ZeroStepBudget,
}

impl std::fmt::Display for RunConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroStepBudget => write!(f, "step budget must be at least 1"),
        }
    }
}

impl std::error::Error for RunConfigError {}

impl RunConfig {
    /// Default limits with the given strategy.
    #[must_use]
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Check the configuration before a run starts.
    ///
    /// # Errors
    ///
    /// Returns [`RunConfigError::ZeroStepBudget`] for `step_budget == Some(0)`.
    pub fn validate(&self) -> Result<(), RunConfigError> {
        if self.step_budget == Some(0) {
            return Err(RunConfigError::ZeroStepBudget);
        }
        Ok(())
    }

    /// Whether the run has to go through the stepwise driver.
    #[must_use]
    pub fn is_stepwise(&self) -> bool {
        self.step_budget.is_some() || self.record_frames
    }
}
