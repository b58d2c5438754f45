//! # verdoc-store
//!
//! JSON file persistence and TOML configuration for verdoc chains.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use verdoc_chain::{Chain, ChainStore};
//! use verdoc_store::JsonFileStore;
//!
//! let store = JsonFileStore::new("blockchain.json");
//! store.save(&Chain::new("first draft"))?;
//! let restored = store.load()?;
//! assert!(restored.is_valid());
//! ```

pub mod config;
pub mod json;

pub use config::{StoreConfig, DEFAULT_CHAIN_FILE};
pub use json::{load, save, JsonFileStore};

// ── Tests ─────────────────────────────────────────────────────────────────────
