use anyhow::Context;
use fake::rand;
use std::io::Write;
use std::path::Path;

/// Write `content` to `path` by staging it in a temporary sibling file and
/// renaming it into place. A crash mid-write leaves the previous file
/// contents intact, never a torn file.
pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("invalid target path {}", path.display()))?;
    let temp_path = dir.join(generate_temp_name());

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("unable to open temp file {}", temp_path.display()))?;

    file.write_all(content)
        .with_context(|| format!("unable to write temp file {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("unable to rename temp file to {}", path.display()))?;

    Ok(())
}

fn generate_temp_name() -> String {
    format!("tmp-{}", rand::random::<u32>())
}
