//! Integrity violations reported by chain validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The first broken link found while validating a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChainViolation {
    /// The record's stored hash differs from the hash recomputed from its fields.
    HashMismatch { index: usize },

    /// The record's `previous_hash` differs from its predecessor's hash.
    BrokenLink { index: usize },
}

impl ChainViolation {
    /// Position of the offending record.
    pub fn index(&self) -> usize {
        match *self {
            ChainViolation::HashMismatch { index } | ChainViolation::BrokenLink { index } => index,
        }
    }
}

impl fmt::Display for ChainViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainViolation::HashMismatch { index } => {
                write!(f, "version {index}: stored hash does not match its contents")
            }
            ChainViolation::BrokenLink { index } => {
                write!(
                    f,
                    "version {index}: previous hash does not match version {}",
                    index.saturating_sub(1)
                )
            }
        }
    }
}
