use crate::areas::persistence::write_atomically;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use anyhow::Context;
use std::path::Path;

/// Content-addressed store for commit records.
///
/// Each record lives at `commits/<hash>` as pretty-printed JSON; the hash is
/// recomputed from the record itself, so a stored object is its own
/// integrity proof. Records are never mutated or deleted.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    /// Persist a commit record under its hash and return the hash.
    pub fn store(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let oid = commit.object_id()?;
        let object_path = self.path.join(oid.as_ref());
        let content = commit.to_pretty_json()?;

        write_atomically(&object_path, content.as_bytes()).with_context(|| {
            format!("unable to write commit object {}", object_path.display())
        })?;

        Ok(oid)
    }

    /// Load a commit record by hash.
    ///
    /// Returns `Ok(None)` when the object file does not exist (an absent
    /// ancestor degrades a history walk instead of failing it) and
    /// [`RepositoryError::CorruptObject`] when the file exists but cannot
    /// be read or parsed.
    pub fn load(&self, oid: &ObjectId) -> anyhow::Result<Option<Commit>> {
        let object_path = self.path.join(oid.as_ref());

        if !object_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&object_path)
            .map_err(|_| RepositoryError::CorruptObject(oid.to_string()))?;
        let commit = Commit::from_json(&content)
            .map_err(|_| RepositoryError::CorruptObject(oid.to_string()))?;

        Ok(Some(commit))
    }
}
