use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::HashSet;
use std::io::Write;

impl Repository {
    /// Print the commit history, most recent first.
    ///
    /// The walk follows parent references from HEAD and stops silently at
    /// the first missing commit object, reporting whatever prefix of the
    /// chain is reachable. The visited set guards against a malformed
    /// cyclic chain; well-formed chains never revisit a hash.
    pub fn log(&mut self) -> anyhow::Result<()> {
        let mut cursor = self.refs().read_head()?;

        if cursor.is_none() {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        }

        let mut visited: HashSet<ObjectId> = HashSet::new();

        while let Some(commit_id) = cursor {
            if !visited.insert(commit_id.clone()) {
                break;
            }

            let Some(commit) = self.database().load(&commit_id)? else {
                break;
            };

            writeln!(self.writer(), "commit {commit_id}")?;
            writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
            writeln!(self.writer())?;
            for message_line in commit.message().lines() {
                writeln!(self.writer(), "    {message_line}")?;
            }
            writeln!(self.writer())?;

            cursor = commit.parent().cloned();
        }

        Ok(())
    }
}
