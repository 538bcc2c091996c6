//! Search limits and step accounting.
//!
//! Both solvers are exhaustive exponential searches intended for
//! puzzle-sized inputs. `SearchLimits` lets a caller cap the number of
//! search steps as a defensive measure; the default is unlimited, matching
//! the plain decision-procedure contract.

use serde::{Deserialize, Serialize};

use super::error::SearchError;

/// Resource limits applied to a search.
///
/// A "step" is one unit of search work: an attempt to attach a tile to the
/// partial chain, or one probe of a neighboring grid cell. Exceeding the
/// budget aborts the search with [`SearchError::BudgetExhausted`] rather
/// than returning a misleading `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum search steps. `None` for unlimited.
    pub max_steps: Option<u64>,
}

impl SearchLimits {
    /// Unlimited search.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_steps: None }
    }

    /// Set a step budget.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

/// Running step count for one top-level search call.
///
/// Owned exclusively by the active call; never shared across calls.
#[derive(Clone, Debug)]
pub(crate) struct StepCounter {
    taken: u64,
    budget: Option<u64>,
}

impl StepCounter {
    pub(crate) fn new(limits: SearchLimits) -> Self {
        Self { taken: 0, budget: limits.max_steps }
    }

    /// Account for one search step.
    pub(crate) fn tick(&mut self) -> Result<(), SearchError> {
        self.taken += 1;
        match self.budget {
            Some(budget) if self.taken > budget => {
                Err(SearchError::BudgetExhausted { budget })
            }
            _ => Ok(()),
        }
    }

    #[cfg(test)]
    pub(crate) fn taken(&self) -> u64 {
        self.taken
    }
}
