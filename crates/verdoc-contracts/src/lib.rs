//! # verdoc-contracts
//!
//! Shared types and error contracts for the verdoc document history engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions and error types.

pub mod error;
pub mod marker;
pub mod violation;

pub use error::{VerdocError, VerdocResult};
pub use marker::LineMarker;
pub use violation::ChainViolation;
