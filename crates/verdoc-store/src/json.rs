//! JSON file implementation of `ChainStore`.
//!
//! The file holds a single JSON array of records. Writes replace the whole
//! file; reads parse the whole file. Content that does not parse as an
//! array of records is treated as an empty history.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use verdoc_chain::{Chain, ChainStore};
use verdoc_contracts::{VerdocError, VerdocResult};

/// A `ChainStore` backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileStore {
    /// Create a store for `path` that writes indented JSON.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Choose between indented and compact output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn io_error(&self, err: std::io::Error) -> VerdocError {
        VerdocError::Io {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

impl ChainStore for JsonFileStore {
    /// Serialize `chain` and overwrite the backing file.
    fn save(&self, chain: &Chain) -> VerdocResult<()> {
        let encoded = match self.pretty {
            true => serde_json::to_string_pretty(chain),
            false => serde_json::to_string(chain),
        };
        let encoded = encoded.map_err(|e| VerdocError::Serialization {
            reason: format!("failed to encode chain: {}", e),
        })?;

        fs::write(&self.path, encoded).map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            len = chain.len(),
            latest_hash = %chain.latest().map(|r| r.hash()).unwrap_or_default(),
            "chain saved"
        );
        Ok(())
    }

    /// Read and parse the backing file.
    ///
    /// Returns `Err(Io)` only when the file cannot be read. Empty or
    /// malformed content yields an empty chain.
    ///
    /// Parsing is all-or-nothing: one bad record discards the whole file.
    /// Timestamps must carry a UTC offset (`Z` or `+hh:mm`); a timestamp
    /// without one, as written for unspecified-kind local times, is
    /// malformed and the history loads empty.
    fn load(&self) -> VerdocResult<Chain> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let chain = parse_chain(&contents, &self.path);

        info!(path = %self.path.display(), len = chain.len(), "chain loaded");
        Ok(chain)
    }
}

/// Parse persisted chain text, recovering to an empty chain on bad input.
fn parse_chain(contents: &str, path: &Path) -> Chain {
    if contents.trim().is_empty() {
        warn!(path = %path.display(), "chain file is empty; starting with no versions");
        return Chain::default();
    }

    match serde_json::from_str::<Option<Chain>>(contents) {
        Ok(Some(chain)) => chain,
        Ok(None) => {
            warn!(path = %path.display(), "chain file holds null; starting with no versions");
            Chain::default()
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "chain file is not a record array; starting with no versions"
            );
            Chain::default()
        }
    }
}

/// Write `chain` to `path` as indented JSON.
pub fn save(path: impl AsRef<Path>, chain: &Chain) -> VerdocResult<()> {
    JsonFileStore::new(path.as_ref()).save(chain)
}

/// Read a chain from `path`. Same recovery rules as `JsonFileStore::load`.
pub fn load(path: impl AsRef<Path>) -> VerdocResult<Chain> {
    JsonFileStore::new(path.as_ref()).load()
}
