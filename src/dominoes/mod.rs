//! Domino chain solving.
//!
//! Tiles are edges of a multigraph over pip values; a chain that consumes
//! every tile is an Eulerian path. The solver combines a doubles
//! pre-filter and a degree-parity prune with an exhaustive backtracking
//! search over the remaining tiles.

pub mod chain;
pub mod degree;
pub mod tile;

pub use chain::{can_form_chain, ChainSolver, MAX_TILES};
pub use degree::FaceDegrees;
pub use tile::{Orientations, Tile};
