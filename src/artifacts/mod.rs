//! Data structures and algorithms
//!
//! - `diff`: line-level diffing (Myers' algorithm, hunk grouping)
//! - `objects`: commit records and their identifiers

pub mod diff;
pub mod objects;
