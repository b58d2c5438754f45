//! Persistence seam between the engine and its storage backends.
//!
//! The engine never performs I/O itself. A `ChainStore` externalizes or
//! restores a whole chain in one blocking call; there are no incremental
//! writes.

use verdoc_contracts::VerdocResult;

use crate::chain::Chain;

/// A backend that can persist and restore an entire `Chain`.
pub trait ChainStore {
    /// Overwrite the stored chain with `chain`.
    fn save(&self, chain: &Chain) -> VerdocResult<()>;

    /// Restore the stored chain.
    ///
    /// Implementations should treat empty or malformed stored content as a
    /// chain with no records rather than an error; only failure to reach
    /// the storage at all is an `Err`.
    fn load(&self) -> VerdocResult<Chain>;
}
