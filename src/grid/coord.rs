//! Grid coordinates and the four cardinal directions.

use serde::{Deserialize, Serialize};

/// A grid cell address, 0-indexed by (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighboring coordinate one step in `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative index
    /// space. Upper bounds are the grid's concern, not the coordinate's.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Coord> {
        match direction {
            Direction::East => Some(Coord::new(self.row, self.col.checked_add(1)?)),
            Direction::South => Some(Coord::new(self.row.checked_add(1)?, self.col)),
            Direction::West => Some(Coord::new(self.row, self.col.checked_sub(1)?)),
            Direction::North => Some(Coord::new(self.row.checked_sub(1)?, self.col)),
        }
    }

    /// True when `other` is exactly one cardinal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        Direction::ALL
            .iter()
            .any(|&d| self.step(d) == Some(other))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four cardinal directions.
///
/// `ALL` lists them in the fixed probe order of the path search:
/// east, south, west, north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// All directions in search probe order.
    pub const ALL: [Direction; 4] =
        [Direction::East, Direction::South, Direction::West, Direction::North];
}
