//! # puzzle-search
//!
//! Two small backtracking decision procedures:
//!
//! - [`dominoes`]: can a multiset of domino tiles be arranged in a single
//!   chain where adjacent tiles share a face value?
//! - [`grid`]: can a target word be traced as a non-self-intersecting path
//!   of 4-adjacent cells in a character grid?
//!
//! ## Design Principles
//!
//! 1. **Pure decision procedures**: No I/O, no persisted state, no
//!    randomness. Callers parse raw input into [`Tile`] / [`Grid`] values
//!    and render the boolean (or witness-path) result.
//!
//! 2. **Invalid input is never a "no"**: Malformed input is rejected at
//!    the boundary with [`SearchError`] before any search starts; during
//!    search the only failure is an exhausted step budget.
//!
//! 3. **Search state owned per call**: Each top-level call carries its own
//!    used-tile bitmask or visited set; a solver value is just its
//!    [`SearchLimits`] and can be reused freely across calls.
//!
//! 4. **Prune, then exhaust**: The domino solver fails fast on stranded
//!    doubles and Eulerian-path parity, but those prunes are necessary
//!    conditions only; the backtracking search always has the final word.
//!
//! ## Modules
//!
//! - `core`: error type, search limits, step accounting
//! - `dominoes`: tiles, face degrees, the chain solver
//! - `grid`: coordinates, the character grid, the path search

pub mod core;
pub mod dominoes;
pub mod grid;

// Re-export commonly used types
pub use crate::core::{SearchError, SearchLimits};

pub use crate::dominoes::{can_form_chain, ChainSolver, FaceDegrees, Tile, MAX_TILES};

pub use crate::grid::{exists_path, find_path, Coord, Direction, Grid, PathSearch};
