//! # verdoc-chain
//!
//! Append-only, SHA-256 hash-chained version history of a single text
//! document.
//!
//! ## Overview
//!
//! Every edit is stored as a `VersionRecord` holding a positional line diff
//! and the hash of the record before it. Changing any stored field breaks
//! the chain, and `Chain::is_valid` detects it.
//!
//! ## Usage
//!
//! ```rust
//! use verdoc_chain::Chain;
//!
//! let mut chain = Chain::new("Linia 1\nLinia 2");
//! chain.add_version("Linia 1\nNowa linia");
//!
//! assert!(chain.is_valid());
//! assert!(chain.diff_between(0, 1).unwrap().contains("+ Nowa linia"));
//! ```

pub mod chain;
pub mod diff;
pub mod hasher;
pub mod record;
pub mod traits;

pub use chain::Chain;
pub use diff::{compute_diff, reconstruct, DiffStats};
pub use hasher::fingerprint;
pub use record::VersionRecord;
pub use traits::ChainStore;

// ── Tests ─────────────────────────────────────────────────────────────────────
