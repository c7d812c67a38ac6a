//! Commit record
//!
//! A commit snapshots the full text of every staged file, along with a
//! message, a creation timestamp (epoch seconds), and an optional parent
//! hash. No delta encoding and no sharing between commits: each record is
//! self-contained.
//!
//! ## Identity
//!
//! The hash is SHA-1 over the compact JSON rendering of the record with
//! keys sorted at every level. Struct fields are declared in alphabetical
//! order so `serde_json` emits them sorted; `files` is a `BTreeMap`, so its
//! keys are sorted too. The timestamp participates in the hash: two commits
//! that differ only in creation time are distinct objects.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    // Field order is the canonical key order the hash is computed over.
    files: BTreeMap<String, String>,
    message: String,
    parent: Option<ObjectId>,
    timestamp: i64,
}

impl Commit {
    /// Build a commit stamped with the current wall-clock time.
    pub fn new(message: String, files: BTreeMap<String, String>, parent: Option<ObjectId>) -> Self {
        Self::new_with_timestamp(message, files, parent, chrono::Utc::now().timestamp())
    }

    pub fn new_with_timestamp(
        message: String,
        files: BTreeMap<String, String>,
        parent: Option<ObjectId>,
        timestamp: i64,
    ) -> Self {
        Commit {
            files,
            message,
            parent,
            timestamp,
        }
    }

    pub fn files(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// First line of the message, for one-line command echoes.
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Hash of the canonical serialization, hex-encoded.
    pub fn object_id(&self) -> anyhow::Result<ObjectId> {
        let content = serde_json::to_vec(self).context("unable to serialize commit record")?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }

    /// Rendering used for the stored object file.
    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("unable to serialize commit record")
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        serde_json::from_str(content).context("unable to parse commit record")
    }

    /// Creation time rendered in the local timezone for log display.
    pub fn readable_timestamp(&self) -> String {
        use chrono::TimeZone;

        chrono::Local
            .timestamp_opt(self.timestamp, 0)
            .single()
            .map(|timestamp| timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }
}
