//! In-memory key-value store.
//!
//! [`InMemoryStore`] provides a thread-safe [`KeyValueStore`] implementation
//! using `DashMap<String, Vec<R>>` for concurrent partition storage. It
//! mirrors partition-key query semantics: retrieving a key returns every
//! record inserted under it, and a key with no records yields an empty
//! vector rather than an error.
//!
//! Intended for tests and local development; the production backend is
//! [`DynamoDbStore`](crate::store::dynamodb::DynamoDbStore).
//!
//! # Concurrency
//!
//! `DashMap` gives fine-grained shard-level locking, so concurrent
//! retrievals from the fetcher's spawned tasks never contend on a single
//! lock. Reads clone the stored records out of the map.
//!
//! # Examples
//!
//! ```
//! use keyfan::store::memory::InMemoryStore;
//!
//! let store: InMemoryStore<String> = InMemoryStore::new();
//! store.insert("order#7", "widget".to_string());
//! store.insert("order#7", "gadget".to_string());
//! assert_eq!(store.len(), 1);
//! ```

use async_trait::async_trait;
use dashmap::DashMap;

use crate::store::{KeyValueStore, StoreError};

/// Thread-safe in-memory store using [`DashMap`].
///
/// Each partition key maps to the list of records inserted under it, in
/// insertion order. Generic over any cloneable record type.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use keyfan::ParallelFetcher;
/// use keyfan::store::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// store.insert("k", 1u64);
/// let fetcher = ParallelFetcher::new(store);
/// ```
#[derive(Debug)]
pub struct InMemoryStore<R> {
    partitions: DashMap<String, Vec<R>>,
}

impl<R: Clone> InMemoryStore<R> {
    /// Creates an empty in-memory store.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyfan::store::memory::InMemoryStore;
    ///
    /// let store: InMemoryStore<u32> = InMemoryStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            partitions: DashMap::new(),
        }
    }

    /// Appends a record under the given partition key.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyfan::store::memory::InMemoryStore;
    ///
    /// let store = InMemoryStore::new();
    /// store.insert("k", "v1");
    /// store.insert("k", "v2");
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn insert(&self, key: impl Into<String>, record: R) {
        self.partitions.entry(key.into()).or_default().push(record);
    }

    /// Returns the number of distinct partition keys stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyfan::store::memory::InMemoryStore;
    ///
    /// let store: InMemoryStore<u32> = InMemoryStore::new();
    /// assert_eq!(store.len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Returns `true` if the store contains no partitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyfan::store::memory::InMemoryStore;
    ///
    /// let store: InMemoryStore<u32> = InMemoryStore::new();
    /// assert!(store.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }
}

impl<R: Clone> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Clone + Send + Sync + 'static> KeyValueStore for InMemoryStore<R> {
    type Record = Vec<R>;

    async fn retrieve(&self, key: &str) -> Result<Self::Record, StoreError> {
        let records = self
            .partitions
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn retrieve_returns_all_records_in_insertion_order() {
        let store = InMemoryStore::new();
        store.insert("pk", "first");
        store.insert("pk", "second");

        let records = store.retrieve("pk").await.unwrap();
        assert_eq!(records, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn retrieve_unknown_key_yields_empty_vec() {
        let store: InMemoryStore<String> = InMemoryStore::new();
        let records = store.retrieve("missing").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn retrieve_does_not_drain_the_partition() {
        let store = InMemoryStore::new();
        store.insert("pk", 7u64);

        let first = store.retrieve("pk").await.unwrap();
        let second = store.retrieve("pk").await.unwrap();
        assert_eq!(first, second);
    }
}
