//! Error types for parallel fetch operations.
//!
//! Defines [`FetchError`], the aggregate error surfaced by
//! [`ParallelFetcher::fetch_all`](crate::fetch::ParallelFetcher::fetch_all).
//! Per-retrieval failures live in [`StoreError`](crate::store::StoreError);
//! this module only covers how a single failure fails the whole batch.

use crate::store::StoreError;

/// The aggregate error returned by `fetch_all`.
///
/// The fan-out contract is all-or-nothing: the first failure observed at the
/// join point fails the entire batch, and no partial results are returned.
/// Each variant carries the failing key and its position in the input
/// sequence.
///
/// # Examples
///
/// ```
/// use keyfan::{FetchError, StoreError};
///
/// let err = FetchError::Retrieval {
///     key: "user#9".to_string(),
///     index: 3,
///     source: StoreError::NotFound { key: "user#9".to_string() },
/// };
/// assert!(err.to_string().contains("user#9"));
/// assert!(err.to_string().contains("position 3"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A retrieval task's underlying store query failed.
    #[error("retrieval failed for key {key} (position {index}): {source}")]
    Retrieval {
        /// The key whose retrieval failed.
        key: String,
        /// The key's position in the input sequence.
        index: usize,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },

    /// A retrieval task never reported a result (it panicked or its
    /// runtime was shut down).
    #[error("retrieval task for key {key} (position {index}) did not complete: {source}")]
    TaskFailed {
        /// The key whose task failed to complete.
        key: String,
        /// The key's position in the input sequence.
        index: usize,
        /// The join failure from the task handle.
        #[source]
        source: tokio::task::JoinError,
    },
}
