use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_algorithm::MyersDiff;
use crate::artifacts::diff::hunk::Hunk;
use crate::errors::RepositoryError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print a unified diff between the head commit's snapshot of `file`
    /// and its current working content.
    ///
    /// Only the head commit is consulted: a file present in an ancestor but
    /// absent from the head snapshot is reported as not in the last commit.
    pub fn diff(&mut self, file: &str) -> anyhow::Result<()> {
        if !self.workspace().file_exists(file) {
            return Err(RepositoryError::MissingFile(file.to_string()).into());
        }

        let head = self
            .refs()
            .read_head()?
            .ok_or(RepositoryError::NoCommits)?;
        let commit = self
            .database()
            .load(&head)?
            .ok_or_else(|| RepositoryError::CorruptObject(head.to_string()))?;

        let committed = commit
            .files()
            .get(file)
            .ok_or_else(|| RepositoryError::NotInLastCommit(file.to_string()))?;
        let working = self.workspace().read_file(file)?;

        let committed_lines: Vec<String> =
            committed.lines().map(|line| line.to_string()).collect();
        let working_lines: Vec<String> = working.lines().map(|line| line.to_string()).collect();

        let edits = MyersDiff::new(&committed_lines, &working_lines).diff();
        let hunks = Hunk::filter(edits);

        if hunks.is_empty() {
            writeln!(self.writer(), "No changes.")?;
            return Ok(());
        }

        writeln!(self.writer(), "{}", "--- committed".bold())?;
        writeln!(self.writer(), "{}", "+++ working".bold())?;

        for hunk in hunks {
            writeln!(self.writer(), "{}", hunk.header().cyan())?;
            for edit in hunk.edits() {
                writeln!(self.writer(), "{edit}")?;
            }
        }

        Ok(())
    }
}
