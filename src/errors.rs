//! Failure taxonomy for repository operations.
//!
//! Soft outcomes (a path that is already staged, a path that was never
//! staged) are not errors: they are reported through the repository writer
//! and the operation succeeds. Everything here is a hard failure that
//! aborts the current operation with a human-readable message.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The staging index (or the whole `.nit` directory) is missing.
    #[error("Repository not initialised (run `nit init` first)")]
    NotInitialized,

    /// A referenced file is absent from the working area.
    #[error("{0} does not exist")]
    MissingFile(String),

    /// Commit attempted with an empty staging area.
    #[error("No files to commit")]
    NothingToCommit,

    /// Diff attempted before any commit exists.
    #[error("No commits to diff against")]
    NoCommits,

    /// The diff target is not part of the head commit's snapshot.
    #[error("{0} not found in last commit")]
    NotInLastCommit(String),

    /// A referenced commit object is missing or cannot be parsed.
    #[error("commit object {0} is missing or unreadable")]
    CorruptObject(String),
}
