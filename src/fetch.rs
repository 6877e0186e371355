//! The fan-out/fan-in core: one retrieval task per key, joined in input
//! order.
//!
//! [`ParallelFetcher`] wraps a shared [`KeyValueStore`] and exposes
//! [`fetch_all`](ParallelFetcher::fetch_all). Each key gets its own spawned
//! tokio task so that one slow or blocking retrieval cannot stall the
//! others; the fetcher then suspends until every task has reported back.
//!
//! # Ordering
//!
//! Results are collected by input position, not completion order: the
//! handle for `keys[i]` fills slot `i`, so a slow first key still produces
//! its record first in the output.
//!
//! # Failure
//!
//! The batch is all-or-nothing. The first failure observed at the join
//! point (in input order) is returned and the remaining handles are
//! dropped. Dropping a tokio `JoinHandle` detaches the task rather than
//! aborting it, so still-running siblings are abandoned to finish on their
//! own and their results are discarded.

use std::sync::Arc;

use crate::error::FetchError;
use crate::store::KeyValueStore;

/// Fans a batch of partition-key retrievals out across tokio tasks and
/// joins the results in input order.
///
/// The store is an injected dependency shared behind an `Arc`; every
/// spawned task clones the `Arc`, so a single client (and its connection
/// pool) serves the whole batch.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use keyfan::ParallelFetcher;
/// use keyfan::store::memory::InMemoryStore;
///
/// # async fn example() -> Result<(), keyfan::FetchError> {
/// let store = Arc::new(InMemoryStore::new());
/// store.insert("a", 1u32);
/// store.insert("b", 2u32);
///
/// let fetcher = ParallelFetcher::new(store);
/// let records = fetcher.fetch_all(["a", "b"]).await?;
/// assert_eq!(records, vec![vec![1], vec![2]]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ParallelFetcher<S> {
    store: Arc<S>,
}

impl<S> Clone for ParallelFetcher<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ParallelFetcher<S>
where
    S: KeyValueStore + 'static,
{
    /// Creates a fetcher over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Retrieves every key concurrently and returns the records in input
    /// order.
    ///
    /// All tasks are spawned before any is awaited, then joined one by one
    /// in input position. Duplicate keys each get their own independent
    /// retrieval. An empty input returns an empty vector without spawning
    /// anything.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Retrieval`] when a task's store query fails. The
    ///   error names the failing key and its input position; no partial
    ///   results are returned.
    /// - [`FetchError::TaskFailed`] when a task panicked or was torn down
    ///   before reporting a result.
    ///
    /// After an error, handles not yet joined are dropped; their tasks keep
    /// running detached and their results are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use keyfan::ParallelFetcher;
    /// use keyfan::store::memory::InMemoryStore;
    ///
    /// # async fn example() -> Result<(), keyfan::FetchError> {
    /// let store = Arc::new(InMemoryStore::new());
    /// store.insert("k", "v");
    ///
    /// let fetcher = ParallelFetcher::new(store);
    /// // Duplicates are retrieved independently, one slot each.
    /// let records = fetcher.fetch_all(["k", "k"]).await?;
    /// assert_eq!(records.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn fetch_all<I>(&self, keys: I) -> Result<Vec<S::Record>, FetchError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(keys = keys.len(), "dispatching parallel retrievals");

        // Fire everything before joining anything.
        let handles: Vec<_> = keys
            .iter()
            .map(|key| {
                let store = Arc::clone(&self.store);
                let key = key.clone();
                tokio::spawn(async move { store.retrieve(&key).await })
            })
            .collect();

        let mut records = Vec::with_capacity(keys.len());
        for (index, (handle, key)) in handles.into_iter().zip(keys).enumerate() {
            match handle.await {
                Ok(Ok(record)) => records.push(record),
                Ok(Err(source)) => {
                    tracing::warn!(%key, index, error = %source, "retrieval failed, failing the batch");
                    return Err(FetchError::Retrieval { key, index, source });
                }
                Err(source) => {
                    tracing::warn!(%key, index, "retrieval task did not complete");
                    return Err(FetchError::TaskFailed { key, index, source });
                }
            }
        }
        Ok(records)
    }
}
