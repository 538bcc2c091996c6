//! Error type shared by both solvers.
//!
//! Malformed input is rejected before any search begins and is reported as
//! an invalid-input error, never as a `false` decision. During search the
//! only failure is exhausting a caller-supplied step budget.

use thiserror::Error;

/// Errors produced by the solvers.
///
/// A `false` decision is not an error: these variants cover input that was
/// rejected at the boundary, or a search cut short by [`SearchLimits`].
///
/// [`SearchLimits`]: crate::core::SearchLimits
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A tile carried a pip value outside the domino alphabet.
    #[error("pip value {pip} on tile [{a},{b}] exceeds the maximum of {max}")]
    PipOutOfRange {
        /// The offending pip value.
        pip: u8,
        /// Faces of the tile it appeared on.
        a: u8,
        b: u8,
        /// Largest allowed pip value.
        max: u8,
    },

    /// More tiles than the solver's index bitmask can track.
    #[error("{count} tiles exceeds the supported maximum of {max}")]
    TooManyTiles {
        /// Number of tiles supplied.
        count: usize,
        /// Largest supported tile count.
        max: usize,
    },

    /// The configured step budget ran out before the search concluded.
    #[error("step budget of {budget} exhausted before the search concluded")]
    BudgetExhausted {
        /// The budget that was configured.
        budget: u64,
    },
}

impl SearchError {
    /// True for errors caused by malformed input (as opposed to a search
    /// stopped by its step budget).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SearchError::PipOutOfRange { .. } | SearchError::TooManyTiles { .. }
        )
    }
}
