use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Stage a file for the next commit.
    ///
    /// Staging an already-staged file is reported, not failed; the staged
    /// set is left with a single occurrence of the path.
    pub fn add(&mut self, file: &str) -> anyhow::Result<()> {
        if !self.workspace().file_exists(file) {
            return Err(RepositoryError::MissingFile(file.to_string()).into());
        }

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

        if index.add(file) {
            index.write_updates()?;
            writeln!(self.writer(), "Added {file} to the staging area")?;
        } else {
            writeln!(self.writer(), "{file} is already staged")?;
        }

        Ok(())
    }
}
