//! The document history chain.
//!
//! `Chain` owns an append-only `Vec` of `VersionRecord`s. It creates the
//! genesis record, appends new versions, answers reconstruction and diff
//! queries, and validates hash linkage on demand.
//!
//! Validation rules, for every record after the first:
//!
//! 1. **Hash correctness**: the stored `hash` equals the value recomputed
//!    from the record's own fields.
//! 2. **Linkage**: the stored `previous_hash` equals the preceding record's
//!    `hash`.
//!
//! The genesis record is never checked against a predecessor.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use verdoc_contracts::{ChainViolation, VerdocError, VerdocResult};

use crate::{
    diff::{compute_diff, genesis_diff, reconstruct},
    record::VersionRecord,
};

/// Ordered, append-only version history of one document.
///
/// Serializes as a plain array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    pub(crate) records: Vec<VersionRecord>,
}

impl Chain {
    /// Create a chain whose genesis record holds `initial_content`.
    pub fn new(initial_content: &str) -> Self {
        let genesis = genesis_record(initial_content, Utc::now());
        debug!(hash = %genesis.hash(), "genesis record created");
        Self {
            records: vec![genesis],
        }
    }

    /// Adopt `records` as a chain without checking them.
    ///
    /// Used when restoring persisted history; call `is_valid` to check it.
    pub fn from_records(records: Vec<VersionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[VersionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<VersionRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VersionRecord> {
        self.records.iter()
    }

    /// The most recent record, or `None` for a chain with no records.
    pub fn latest(&self) -> Option<&VersionRecord> {
        self.records.last()
    }

    /// Record `new_content` as the next version of the document.
    ///
    /// The new record's diff is computed against the reconstruction of the
    /// current latest version. On a chain with no records the content
    /// becomes a genesis record instead. Loaded indices are untrusted, so the
    /// next index saturates at `u64::MAX` rather than overflowing.
    pub fn add_version(&mut self, new_content: &str) -> &VersionRecord {
        let record = match self.records.last() {
            Some(last) => {
                let current = reconstruct(self.records.iter().map(VersionRecord::diff));
                let diff = compute_diff(&current, new_content);
                VersionRecord::new(
                    last.index().saturating_add(1),
                    next_timestamp(last.timestamp()),
                    diff,
                    last.hash(),
                )
            }
            None => genesis_record(new_content, Utc::now()),
        };

        debug!(
            index = record.index(),
            hash = %record.hash(),
            previous_hash = %record.previous_hash(),
            "version appended"
        );

        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Reconstruct the document as of version `index`.
    ///
    /// Replays the diffs of records `0..=index` in order. Fails with
    /// `VersionOutOfRange` when `index` is not a position in the chain.
    pub fn document_version(&self, index: usize) -> VerdocResult<String> {
        self.check_index(index)?;
        debug!(index, "reconstructing document");
        Ok(reconstruct(
            self.records[..=index].iter().map(VersionRecord::diff),
        ))
    }

    /// Positional diff between the reconstructions of two versions.
    ///
    /// Computed fresh from both snapshots, not assembled from the
    /// per-record diffs in between.
    pub fn diff_between(&self, from: usize, to: usize) -> VerdocResult<String> {
        let from_text = self.document_version(from)?;
        let to_text = self.document_version(to)?;
        Ok(compute_diff(&from_text, &to_text))
    }

    /// Return `true` when every record after the first is intact and linked.
    ///
    /// Empty and genesis-only chains are valid.
    pub fn is_valid(&self) -> bool {
        self.find_violation().is_none()
    }

    /// Find the first record that breaks the chain, if any.
    ///
    /// Stops at the first failure. Each record's hash is checked before its
    /// link to the predecessor.
    pub fn find_violation(&self) -> Option<ChainViolation> {
        for (index, pair) in self.records.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            let index = index + 1;

            if current.hash() != current.recompute_hash() {
                warn!(index, hash = %current.hash(), "stored hash does not match record contents");
                return Some(ChainViolation::HashMismatch { index });
            }

            if current.previous_hash() != previous.hash() {
                warn!(
                    index,
                    previous_hash = %current.previous_hash(),
                    expected = %previous.hash(),
                    "previous hash does not link to predecessor"
                );
                return Some(ChainViolation::BrokenLink { index });
            }
        }

        None
    }

    fn check_index(&self, index: usize) -> VerdocResult<()> {
        if index >= self.records.len() {
            return Err(VerdocError::VersionOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a VersionRecord;
    type IntoIter = std::slice::Iter<'a, VersionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn genesis_record(content: &str, timestamp: DateTime<Utc>) -> VersionRecord {
    VersionRecord::new(
        0,
        timestamp,
        genesis_diff(content),
        VersionRecord::GENESIS_PREV_HASH,
    )
}

/// Current time, nudged forward so it is strictly later than `previous`.
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}
