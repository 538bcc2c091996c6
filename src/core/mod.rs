//! Shared fundamentals: error type and search limits.
//!
//! Both solvers validate input at the boundary and account for search
//! steps through the types in this module; everything domain-specific
//! lives in `dominoes` and `grid`.

pub mod error;
pub mod limits;

pub use error::SearchError;
pub use limits::SearchLimits;
