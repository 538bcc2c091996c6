//! Face-degree accounting for the Eulerian-path parity prune.
//!
//! Viewing tiles as edges of a multigraph over pip values, an open chain
//! that consumes every tile is an Eulerian path, which requires at most two
//! vertices of odd degree. Doubles are excluded: splicing a double into a
//! chain never changes which pip values sit at the endpoints.

use crate::dominoes::tile::Tile;

/// Degree of each pip value over a set of plain (non-double) tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceDegrees {
    counts: [u32; (Tile::MAX_PIP as usize) + 1],
}

impl FaceDegrees {
    /// Tally both faces of every tile.
    ///
    /// The caller is expected to pass plain tiles only; a double would
    /// contribute two to its own vertex and never affect parity anyway.
    #[must_use]
    pub fn tally<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut degrees = Self::default();
        for tile in tiles {
            let (a, b) = tile.faces();
            degrees.counts[a as usize] += 1;
            degrees.counts[b as usize] += 1;
        }
        degrees
    }

    /// Degree of one pip value.
    #[must_use]
    pub fn degree(&self, pip: u8) -> u32 {
        self.counts[pip as usize]
    }

    /// Number of pip values with odd degree.
    #[must_use]
    pub fn odd_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c % 2 == 1).count()
    }

    /// Whether an open chain over these tiles is still possible.
    ///
    /// Necessary, not sufficient: disconnected tile clusters can satisfy
    /// parity and still admit no single chain.
    #[must_use]
    pub fn admits_open_chain(&self) -> bool {
        self.odd_count() <= 2
    }
}
