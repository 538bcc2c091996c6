//! Domino tiles.
//!
//! A tile is an unordered pair of pip values: `[a,b]` and `[b,a]` name the
//! same physical tile, and every operation here treats them identically.

use serde::{Deserialize, Serialize};

use crate::core::error::SearchError;

/// One domino tile, an unordered pair of pip counts.
///
/// The stored order of the two faces is preserved for display but carries
/// no meaning; [`Tile::orientations`] yields both readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    a: u8,
    b: u8,
}

impl Tile {
    /// Largest pip value in the standard double-six set.
    pub const MAX_PIP: u8 = 6;

    /// Create a tile from its two faces.
    ///
    /// No validation happens here; solvers validate the whole input at
    /// their boundary so a bad pip is reported with context.
    #[must_use]
    pub const fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    /// The two faces in stored order.
    #[must_use]
    pub const fn faces(self) -> (u8, u8) {
        (self.a, self.b)
    }

    /// True when both faces carry the same pip count.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.a == self.b
    }

    /// True when either face carries `pip`.
    #[must_use]
    pub const fn has(self, pip: u8) -> bool {
        self.a == pip || self.b == pip
    }

    /// The face opposite to `pip`.
    ///
    /// Returns `None` when the tile does not carry `pip` at all. For a
    /// double `[v,v]` the other face is `v` itself.
    #[must_use]
    pub fn other_face(self, pip: u8) -> Option<u8> {
        if self.a == pip {
            Some(self.b)
        } else if self.b == pip {
            Some(self.a)
        } else {
            None
        }
    }

    /// Both `(lead, trail)` readings of the tile.
    ///
    /// A chain extension reads the tile in one of its two orientations;
    /// this is the explicit iterator over them. Doubles still yield both
    /// readings (they are identical), which the solver never enumerates
    /// since doubles are filtered out before the search.
    pub fn orientations(self) -> Orientations {
        Orientations { tile: self, next: 0 }
    }

    /// Validate every pip on every tile against the domino alphabet.
    pub(crate) fn validate_all(tiles: &[Tile]) -> Result<(), SearchError> {
        for tile in tiles {
            for pip in [tile.a, tile.b] {
                if pip > Self::MAX_PIP {
                    return Err(SearchError::PipOutOfRange {
                        pip,
                        a: tile.a,
                        b: tile.b,
                        max: Self::MAX_PIP,
                    });
                }
            }
        }
        Ok(())
    }
}

impl From<(u8, u8)> for Tile {
    fn from((a, b): (u8, u8)) -> Self {
        Self::new(a, b)
    }
}

impl From<[u8; 2]> for Tile {
    fn from([a, b]: [u8; 2]) -> Self {
        Self::new(a, b)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.a, self.b)
    }
}

/// Iterator over the two `(lead, trail)` readings of a tile.
#[derive(Clone, Debug)]
pub struct Orientations {
    tile: Tile,
    next: u8,
}

impl Iterator for Orientations {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<(u8, u8)> {
        let item = match self.next {
            0 => (self.tile.a, self.tile.b),
            1 => (self.tile.b, self.tile.a),
            _ => return None,
        };
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 2usize.saturating_sub(self.next as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Orientations {}
