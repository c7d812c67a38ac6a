//! HEAD pointer
//!
//! HEAD is a single text file holding either the hex hash of the most
//! recent commit or nothing at all. It is written only by commit and read
//! by every operation that needs the current state. There are no branches
//! and no symbolic indirection: the file content is the whole story.

use crate::areas::persistence::write_atomically;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Name of the HEAD file inside the state directory.
pub const HEAD_FILE: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the state directory (typically `.nit`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_FILE).into_boxed_path()
    }

    /// Read the current head commit hash.
    ///
    /// A missing HEAD file and an empty one both mean "no commits yet" and
    /// read as `None`. Non-empty content must parse as a valid object ID.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read {}", head_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    /// Point HEAD at a new commit.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        write_atomically(&self.head_path(), oid.as_ref().as_bytes())
    }
}
