//! The word-snake path search.
//!
//! A target word is traced through 4-adjacent, pairwise-distinct cells.
//! The visited set is an `im` persistent hash set extended by value on
//! each recursive call, so a backtracked branch never has to undo
//! anything; the witness path under construction is the only mutable
//! state and is popped on the way back out.

use std::hash::BuildHasherDefault;

use log::debug;
use rustc_hash::FxHasher;

use crate::core::error::SearchError;
use crate::core::limits::{SearchLimits, StepCounter};
use crate::grid::coord::{Coord, Direction};
use crate::grid::grid::Grid;

/// Visited-cell set with the fast hasher the rest of the crate uses.
type CoordSet = im::HashSet<Coord, BuildHasherDefault<FxHasher>>;

/// Decision procedure for tracing a word through a character grid.
///
/// Like [`ChainSolver`], the value holds only its limits; each call owns
/// its search state exclusively.
///
/// [`ChainSolver`]: crate::dominoes::ChainSolver
#[derive(Clone, Debug, Default)]
pub struct PathSearch {
    limits: SearchLimits,
}

impl PathSearch {
    /// Create a search with unlimited steps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search with a step budget.
    #[must_use]
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Find a non-self-intersecting path of 4-adjacent cells spelling
    /// `target`, if one exists.
    ///
    /// Starting cells are scanned in row-major order and neighbors probed
    /// east, south, west, north, so the witness is deterministic; the
    /// first complete match short-circuits the rest of the search. An
    /// empty target is vacuously satisfied by the empty path.
    ///
    /// # Errors
    ///
    /// Only a configured step budget running out; see
    /// [`SearchError::BudgetExhausted`].
    pub fn find_path(
        &self,
        grid: &Grid,
        target: &str,
    ) -> Result<Option<Vec<Coord>>, SearchError> {
        let target: Vec<char> = target.chars().collect();
        if target.is_empty() {
            return Ok(Some(Vec::new()));
        }

        let mut steps = StepCounter::new(self.limits);
        for (start, ch) in grid.cells() {
            if ch != target[0] {
                continue;
            }
            let visited = CoordSet::default().update(start);
            let mut path = vec![start];
            if Self::extend(grid, &target, start, &visited, &mut path, &mut steps)? {
                return Ok(Some(path));
            }
        }

        debug!("no path spells the {}-character target", target.len());
        Ok(None)
    }

    /// Decide whether a path spelling `target` exists.
    ///
    /// # Errors
    ///
    /// See [`PathSearch::find_path`].
    pub fn exists_path(&self, grid: &Grid, target: &str) -> Result<bool, SearchError> {
        Ok(self.find_path(grid, target)?.is_some())
    }

    /// Try to grow the path from `pos` by one matching neighbor.
    ///
    /// `path` holds the cells matched so far; its length doubles as the
    /// search depth. `visited` is extended by value for the recursive
    /// call, never mutated in place.
    fn extend(
        grid: &Grid,
        target: &[char],
        pos: Coord,
        visited: &CoordSet,
        path: &mut Vec<Coord>,
        steps: &mut StepCounter,
    ) -> Result<bool, SearchError> {
        if path.len() == target.len() {
            return Ok(true);
        }

        for direction in Direction::ALL {
            steps.tick()?;

            let Some(next) = pos.step(direction) else {
                continue;
            };
            if grid.get(next) != Some(target[path.len()]) || visited.contains(&next) {
                continue;
            }

            path.push(next);
            let extended = visited.update(next);
            if Self::extend(grid, target, next, &extended, path, steps)? {
                return Ok(true);
            }
            path.pop();
        }

        Ok(false)
    }
}

/// Decide path existence with default (unlimited) limits.
///
/// # Errors
///
/// See [`PathSearch::find_path`].
pub fn exists_path(grid: &Grid, target: &str) -> Result<bool, SearchError> {
    PathSearch::new().exists_path(grid, target)
}

/// Find a witness path with default (unlimited) limits.
///
/// # Errors
///
/// See [`PathSearch::find_path`].
pub fn find_path(grid: &Grid, target: &str) -> Result<Option<Vec<Coord>>, SearchError> {
    PathSearch::new().find_path(grid, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_target_is_vacuously_true() {
        let grid = Grid::new(["AB"]);
        assert_eq!(find_path(&grid, ""), Ok(Some(Vec::new())));

        let empty = Grid::new(Vec::<&str>::new());
        assert_eq!(exists_path(&empty, ""), Ok(true));
    }

    #[test]
    fn test_single_cell_match() {
        let grid = Grid::new(["X"]);
        assert_eq!(find_path(&grid, "X"), Ok(Some(vec![Coord::new(0, 0)])));
        assert_eq!(exists_path(&grid, "Y"), Ok(false));
    }

    #[test]
    fn test_straight_line_word() {
        let grid = Grid::new(["CAT", "DOG"]);
        let path = find_path(&grid, "CAT").unwrap().unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn test_snaking_word_turns_corners() {
        let grid = Grid::new(["ABX", "XCX", "XDE"]);
        // A(0,0) B(0,1) C(1,1) D(2,1) E(2,2)
        let path = find_path(&grid, "ABCDE").unwrap().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path[0], Coord::new(0, 0));
        assert_eq!(path[4], Coord::new(2, 2));
    }

    #[test]
    fn test_cells_cannot_be_revisited() {
        // "ABA" needs two distinct A cells next to the same B.
        let grid = Grid::new(["AB"]);
        assert_eq!(exists_path(&grid, "ABA"), Ok(false));

        let grid = Grid::new(["ABA"]);
        assert_eq!(exists_path(&grid, "ABA"), Ok(true));
    }

    #[test]
    fn test_backtracking_recovers_from_dead_end() {
        // The east-first probe commits to the C at (0,2), which has no D
        // neighbor; the search must back out and take the C at (1,1).
        let grid = Grid::new(["ABC", "DCX"]);
        let path = find_path(&grid, "ABCD").unwrap().unwrap();
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_ragged_grid_bounds() {
        let grid = Grid::new(["AB", "AXCD"]);
        assert_eq!(exists_path(&grid, "DCXA"), Ok(true));
        // (0,1) has no east neighbor; the probe must not panic or match.
        assert_eq!(exists_path(&grid, "BC"), Ok(false));
    }

    #[test]
    fn test_budget_exhaustion() {
        let search = PathSearch::with_limits(SearchLimits::default().with_max_steps(1));
        let grid = Grid::new(["AAAA", "AAAA"]);
        assert_eq!(
            search.exists_path(&grid, "AAAAAAA"),
            Err(SearchError::BudgetExhausted { budget: 1 })
        );
    }
}
