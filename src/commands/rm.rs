use crate::areas::repository::Repository;
use crate::errors::RepositoryError;
use std::io::Write;

impl Repository {
    /// Remove a file from the staging area. The working copy is untouched.
    ///
    /// Removing a path that was never staged is reported, not failed.
    pub fn rm(&mut self, file: &str) -> anyhow::Result<()> {
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

        if index.remove(file) {
            index.write_updates()?;
            writeln!(self.writer(), "Removed {file} from the staging area")?;
        } else {
            writeln!(self.writer(), "{file} was not staged")?;
        }

        Ok(())
    }
}
