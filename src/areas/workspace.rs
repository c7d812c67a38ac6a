use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Working directory file access.
///
/// All paths are repository-relative; content is assumed UTF-8 text.
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_exists(&self, file_path: &str) -> bool {
        self.path.join(file_path).exists()
    }

    pub fn read_file(&self, file_path: &str) -> anyhow::Result<String> {
        let full_path = self.path.join(file_path);

        std::fs::read_to_string(&full_path)
            .with_context(|| format!("failed to read {}", full_path.display()))
    }
}
