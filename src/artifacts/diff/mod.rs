//! Line-level diffing
//!
//! - `diff_algorithm`: Myers' shortest-edit-script diff over lines
//! - `hunk`: groups an edit script into context hunks for unified output

pub mod diff_algorithm;
pub mod hunk;
