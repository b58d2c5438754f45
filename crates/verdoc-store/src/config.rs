//! Store and front-end configuration.
//!
//! `StoreConfig` is deserialized from TOML. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! Example:
//! ```toml
//! chain_file = "history/report.json"
//! pretty = false
//! log_filter = "verdoc_chain=debug"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use verdoc_contracts::{VerdocError, VerdocResult};

use crate::json::JsonFileStore;

/// File name used when no configuration names one.
pub const DEFAULT_CHAIN_FILE: &str = "blockchain.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Path of the JSON file holding the chain.
    pub chain_file: PathBuf,

    /// Write indented JSON.
    pub pretty: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            chain_file: PathBuf::from(DEFAULT_CHAIN_FILE),
            pretty: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl StoreConfig {
    /// Parse `s` as TOML.
    ///
    /// Returns `VerdocError::ConfigError` if the TOML is malformed or has
    /// fields this struct does not know.
    pub fn from_toml_str(s: &str) -> VerdocResult<Self> {
        toml::from_str(s).map_err(|e| VerdocError::ConfigError {
            reason: format!("failed to parse store TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as TOML.
    pub fn from_file(path: &Path) -> VerdocResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| VerdocError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build the JSON store this configuration describes.
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.chain_file).with_pretty(self.pretty)
    }
}
