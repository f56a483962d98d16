use alloc::collections::TryReserveError;
use alloc::string::String;

/// Errors reported by [`Bst`](crate::Bst) and [`Dictionary`](crate::Dictionary).
///
/// Nothing in this crate retries or logs; every error is returned to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `insert` was called with a key that is already stored. The tree is unchanged.
    #[error("key `{key}` already exists")]
    DuplicateKey { key: String },

    /// `retrieve` did not find the key.
    #[error("key `{key}` does not exist")]
    KeyNotFound { key: String },

    /// The operation requires at least one stored entry.
    #[error("collection is empty")]
    EmptyCollection,

    /// Storage for a new node could not be acquired.
    #[error("unable to insert: {0}")]
    Allocation(#[from] AllocationError),
}

/// Why node storage could not grow.
///
/// Rust aborts the process on a failed infallible allocation. Tree growth goes through
/// `Vec::try_reserve` instead, so running out of memory surfaces here rather than aborting.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// The allocator refused to grow node storage.
    #[error("{0}")]
    Reserve(#[from] TryReserveError),

    /// Every node handle is in use.
    #[error("node storage is at maximum capacity ({max})")]
    Exhausted { max: usize },
}

/// A specialized `Result` for tree and dictionary operations.
pub type Result<T> = core::result::Result<T, Error>;
