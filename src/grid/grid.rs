//! The character grid.
//!
//! Rows may have different lengths; every access is bounds-checked against
//! the addressed row, so a ragged grid is well-formed input rather than an
//! error.

use serde::{Deserialize, Serialize};

use crate::grid::coord::Coord;

/// A character grid addressed by (row, column).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from rows of text.
    ///
    /// Rows of differing lengths are accepted; cells beyond a short row's
    /// end simply do not exist.
    #[must_use]
    pub fn new<S: AsRef<str>>(rows: impl IntoIterator<Item = S>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of one row, or `None` past the last row.
    #[must_use]
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// The character at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.rows.get(coord.row)?.get(coord.col).copied()
    }

    /// True when `coord` addresses an existing cell.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Iterate over every cell as `(coord, char)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &ch)| (Coord::new(r, c), ch))
        })
    }
}

impl<S: AsRef<str>> FromIterator<S> for Grid {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
