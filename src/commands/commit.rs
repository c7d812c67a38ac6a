use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::errors::RepositoryError;
use std::collections::BTreeMap;
use std::io::Write;

impl Repository {
    /// Snapshot the staged files into a new commit and advance HEAD.
    ///
    /// Staged paths that no longer exist are skipped with a warning. The
    /// three writes (commit object, HEAD, cleared index) are sequential and
    /// not transactional: a crash in between leaves either an unreferenced
    /// object or an uncleared index, both recoverable states.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let mut index = self.index();
        if !index.exists() {
            return Err(RepositoryError::NotInitialized.into());
        }

        index.rehydrate()?;
        if index.recovered() {
            writeln!(
                self.writer(),
                "warning: index was unreadable and has been reset, staged paths were lost"
            )?;
        }

        if index.is_empty() {
            return Err(RepositoryError::NothingToCommit.into());
        }

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let mut files = BTreeMap::new();
        for path in index.entries() {
            if !self.workspace().file_exists(path) {
                writeln!(self.writer(), "warning: {path} not found, skipping")?;
                continue;
            }

            files.insert(path.clone(), self.workspace().read_file(path)?);
        }

        let commit = Commit::new(message.trim().to_string(), files, parent);
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id,
            commit.short_message()
        )?;

        Ok(())
    }
}
