//! Staging area (index)
//!
//! The index tracks which files should be included in the next commit.
//! It is an ordered set of repository-relative paths persisted as a JSON
//! array; order is preserved but does not affect correctness, and no path
//! appears twice.
//!
//! Malformed stored content is not fatal: the index recovers as the empty
//! set and flags the recovery so callers can warn about it instead of
//! silently discarding staged work.

use crate::areas::persistence::write_atomically;
use std::path::Path;

#[derive(Debug)]
pub struct Index {
    path: Box<Path>,
    entries: Vec<String>,
    recovered: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            recovered: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the index file exists on disk, i.e. the repository has been
    /// initialized.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the staged set from disk, replacing any in-memory state.
    ///
    /// Content that fails to parse as a JSON array of strings is treated as
    /// the empty set; [`Index::recovered`] reports that this happened.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.recovered = false;

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(entries) => self.entries = entries,
            Err(_) => self.recovered = true,
        }

        Ok(())
    }

    /// True if the last [`Index::rehydrate`] found malformed content and
    /// reset the staged set.
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stage a path. Returns false (and leaves the set untouched) if the
    /// path is already staged.
    pub fn add(&mut self, path: &str) -> bool {
        if self.entries.iter().any(|entry| entry == path) {
            return false;
        }

        self.entries.push(path.to_string());
        true
    }

    /// Unstage a path. Returns false if the path was not staged.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != path);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Persist the staged set, rewriting the index file in full.
    pub fn write_updates(&self) -> anyhow::Result<()> {
        let content = serde_json::to_vec(&self.entries)?;
        write_atomically(&self.path, &content)
    }
}
