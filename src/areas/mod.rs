//! Core repository components
//!
//! This module contains the building blocks of a nit repository:
//!
//! - `database`: Content-addressed store for commit records
//! - `index`: Staging area tracking files for the next commit
//! - `refs`: HEAD pointer management
//! - `repository`: High-level repository handle and coordination
//! - `workspace`: Working directory file access
//! - `persistence`: Atomic write-then-rename plumbing shared by the above

pub(crate) mod database;
pub(crate) mod index;
pub(crate) mod persistence;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod workspace;
