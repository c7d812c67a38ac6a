use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the `.nit` layout: the commits directory, an empty staged
    /// set, and an empty HEAD. Re-running on an existing repository leaves
    /// the index and HEAD untouched.
    pub fn init(&mut self) -> anyhow::Result<()> {
        fs::create_dir_all(self.database().commits_path())
            .context("Failed to create .nit/commits directory")?;

        let index = self.index();
        if !index.exists() {
            index
                .write_updates()
                .context("Failed to create .nit/index file")?;
        }

        let head_path = self.refs().head_path();
        if !head_path.exists() {
            fs::write(&head_path, b"").context("Failed to create .nit/HEAD file")?;
        }

        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.vcs_path().display()
        )?;

        Ok(())
    }
}
