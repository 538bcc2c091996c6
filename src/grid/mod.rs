//! Word-snake grid search.
//!
//! A target word is matched against paths of 4-adjacent, pairwise-distinct
//! cells in a character grid. Rows may be ragged; every probe is
//! bounds-checked against its own row.

pub mod coord;
#[allow(clippy::module_inception)]
pub mod grid;
pub mod path;

pub use coord::{Coord, Direction};
pub use grid::Grid;
pub use path::{exists_path, find_path, PathSearch};
