//! The domino chain decision procedure.
//!
//! ## Algorithm
//!
//! 1. Validate pips and tile count at the boundary.
//! 2. Filter out doubles: a double can be spliced into any chain that
//!    exposes its value, so a double is feasible iff some plain tile
//!    carries the same pip (and takes no further part in the search).
//! 3. Parity prune: more than two odd-degree pip values rules out an open
//!    chain (Eulerian-path necessity).
//! 4. Backtrack over the plain tiles: seed the partial chain with the
//!    first tile, then grow it from either end, trying every unused tile
//!    in both orientations. Consuming every tile decides true.
//!
//! The parity prune is an optimization only; disconnected tile clusters
//! pass it and are rejected by the exhaustive step.

use log::debug;
use smallvec::SmallVec;

use crate::core::error::SearchError;
use crate::core::limits::{SearchLimits, StepCounter};
use crate::dominoes::degree::FaceDegrees;
use crate::dominoes::tile::Tile;

/// Most tiles a single search accepts. The used-tile set is an index
/// bitmask in a `u64`.
pub const MAX_TILES: usize = 64;

/// Decision procedure for arranging domino tiles into a single chain.
///
/// The solver holds only its [`SearchLimits`]; all search state is owned
/// by the individual call, so one solver value can serve any number of
/// sequential calls.
#[derive(Clone, Debug, Default)]
pub struct ChainSolver {
    limits: SearchLimits,
}

impl ChainSolver {
    /// Create a solver with unlimited search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with a step budget.
    #[must_use]
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Decide whether `tiles` can be arranged in one chain where adjacent
    /// tiles share a face value.
    ///
    /// The empty input and any single tile decide true. Tile order and
    /// per-tile face order never affect the result.
    ///
    /// # Errors
    ///
    /// Invalid input (pip above [`Tile::MAX_PIP`], more than [`MAX_TILES`]
    /// tiles) is rejected before the search starts; a configured step
    /// budget that runs out surfaces as [`SearchError::BudgetExhausted`].
    pub fn can_form_chain(&self, tiles: &[Tile]) -> Result<bool, SearchError> {
        Tile::validate_all(tiles)?;
        if tiles.len() > MAX_TILES {
            return Err(SearchError::TooManyTiles {
                count: tiles.len(),
                max: MAX_TILES,
            });
        }

        // Trivial chains: nothing to place, or a single tile.
        if tiles.len() <= 1 {
            return Ok(true);
        }

        let mut plain: SmallVec<[Tile; 16]> = SmallVec::new();
        let mut doubles: SmallVec<[Tile; 8]> = SmallVec::new();
        for &tile in tiles {
            if tile.is_double() {
                doubles.push(tile);
            } else {
                plain.push(tile);
            }
        }

        // Every double must be able to splice into a chain of the plain
        // tiles: some plain tile has to expose its value.
        for double in &doubles {
            let (value, _) = double.faces();
            if !plain.iter().any(|t| t.has(value)) {
                debug!("double {double} has no plain tile to attach to");
                return Ok(false);
            }
        }

        // All plain tiles share faces with the feasible doubles, so one
        // plain tile always chains.
        if plain.len() == 1 {
            return Ok(true);
        }

        let degrees = FaceDegrees::tally(&plain);
        if !degrees.admits_open_chain() {
            debug!(
                "parity prune: {} pip values with odd degree",
                degrees.odd_count()
            );
            return Ok(false);
        }

        let mut search = ChainSearch {
            tiles: &plain,
            steps: StepCounter::new(self.limits),
        };
        search.run()
    }
}

/// Decide chainability with default (unlimited) limits.
///
/// # Errors
///
/// See [`ChainSolver::can_form_chain`].
pub fn can_form_chain(tiles: &[Tile]) -> Result<bool, SearchError> {
    ChainSolver::new().can_form_chain(tiles)
}

/// One backtracking run over the plain tiles.
///
/// The partial chain is represented only by its two exposed end faces plus
/// the used-tile bitmask; the interior of the chain never matters again.
struct ChainSearch<'a> {
    tiles: &'a [Tile],
    steps: StepCounter,
}

impl ChainSearch<'_> {
    fn run(&mut self) -> Result<bool, SearchError> {
        // Any valid chain contains tile 0 somewhere, and growing from both
        // ends reaches every arrangement, so seeding with tile 0 loses
        // nothing.
        let (left, right) = self.tiles[0].faces();
        self.extend(left, right, 1, 1)
    }

    fn extend(
        &mut self,
        left: u8,
        right: u8,
        used: u64,
        count: usize,
    ) -> Result<bool, SearchError> {
        if count == self.tiles.len() {
            return Ok(true);
        }

        for (i, tile) in self.tiles.iter().enumerate() {
            if used & (1 << i) != 0 {
                continue;
            }
            for (lead, trail) in tile.orientations() {
                self.steps.tick()?;

                if right == lead
                    && self.extend(left, trail, used | (1 << i), count + 1)?
                {
                    return Ok(true);
                }
                if left == trail
                    && self.extend(lead, right, used | (1 << i), count + 1)?
                {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}
