//! Version records.
//!
//! `VersionRecord` is a single entry in the hash chain. It wraps one diff
//! with its position, creation time, and the SHA-256 hashes that make
//! tampering detectable. Fields are private and there are no setters: once
//! built, a record never changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::hasher::fingerprint;

/// One immutable entry in a document's version history.
///
/// Each record commits to its predecessor via `previous_hash`. Altering any
/// field of a stored record invalidates its `hash`, which
/// `Chain::is_valid` detects.
///
/// Serialized field names are camelCase (`previousHash`); PascalCase names
/// are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Position in the chain, starting at 0.
    #[serde(alias = "Index")]
    index: u64,

    /// Wall-clock time (UTC) the record was created.
    #[serde(alias = "Timestamp")]
    timestamp: DateTime<Utc>,

    /// Marked diff lines describing this version.
    #[serde(alias = "Diff")]
    diff: String,

    /// Hash of the preceding record, or `GENESIS_PREV_HASH` for the first.
    #[serde(alias = "PreviousHash")]
    previous_hash: String,

    /// Hash of this record's fields as computed at construction.
    #[serde(alias = "Hash")]
    hash: String,
}

impl VersionRecord {
    /// The sentinel `previous_hash` carried by the first record of a chain.
    pub const GENESIS_PREV_HASH: &'static str = "0";

    /// Build a record and compute its hash from the given fields.
    pub fn new(
        index: u64,
        timestamp: DateTime<Utc>,
        diff: impl Into<String>,
        previous_hash: impl Into<String>,
    ) -> Self {
        let diff = diff.into();
        let previous_hash = previous_hash.into();
        let hash = fingerprint(index, &timestamp, &diff, &previous_hash);
        Self {
            index,
            timestamp,
            diff,
            previous_hash,
            hash,
        }
    }

    /// Rebuild a record from stored fields, adopting `hash` as-is.
    ///
    /// Nothing is verified here. Records from untrusted storage go through
    /// this path and are checked later by chain validation.
    pub fn from_parts(
        index: u64,
        timestamp: DateTime<Utc>,
        diff: impl Into<String>,
        previous_hash: impl Into<String>,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            index,
            timestamp,
            diff: diff.into(),
            previous_hash: previous_hash.into(),
            hash: hash.into(),
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn diff(&self) -> &str {
        &self.diff
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Whether this record claims to start a chain.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash == Self::GENESIS_PREV_HASH
    }

    /// Recompute the hash from the stored fields.
    ///
    /// Equal to `hash()` for any record that has not been altered since
    /// construction.
    pub fn recompute_hash(&self) -> String {
        fingerprint(self.index, &self.timestamp, &self.diff, &self.previous_hash)
    }
}
