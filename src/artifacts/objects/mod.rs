//! Commit records and identifiers
//!
//! Every commit is a full snapshot: a mapping from staged paths to their
//! complete text content, plus message, timestamp, and an optional parent
//! hash. Identity is the SHA-1 of the record's canonical serialization.

pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
