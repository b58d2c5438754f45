//! Error types for the verdoc engine and its stores.
//!
//! Fallible operations return `VerdocResult<T>`. Chain integrity is not an
//! error: a tampered chain is reported by `Chain::is_valid()` returning
//! `false`, never by a variant here.

use thiserror::Error;

/// The unified error type for verdoc.
#[derive(Debug, Error)]
pub enum VerdocError {
    /// A query named a version index the chain does not have.
    ///
    /// Indices are never clamped; `len` is the chain length at the time of
    /// the query so callers can report the valid range.
    #[error("version {index} does not exist (chain has {len} versions)")]
    VersionOutOfRange { index: usize, len: usize },

    /// The store could not read or write its backing file.
    #[error("i/o error on '{path}': {reason}")]
    Io { path: String, reason: String },

    /// The chain could not be encoded for persistence.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The operation needs at least one record and the chain has none.
    #[error("chain has no versions")]
    EmptyChain,
}

/// Convenience alias used throughout the verdoc crates.
pub type VerdocResult<T> = Result<T, VerdocError>;
