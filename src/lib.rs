//! Parallel partition-key fetch for key-value stores.
//!
//! This crate bundles two small, unrelated utilities:
//!
//! 1. [`ParallelFetcher`] -- given a sequence of partition keys, issues one
//!    independent retrieval per key on its own tokio task, then joins all
//!    results into a vector that preserves input order. The aggregate
//!    succeeds only if every retrieval succeeds; there is no partial-result
//!    mode.
//! 2. [`sorted`] -- returns a case-sensitive, locale-aware, stably sorted
//!    copy of a string slice without mutating the input.
//!
//! # Overview
//!
//! Retrieval goes through the [`KeyValueStore`] trait: an asynchronous
//! `retrieve(key) -> Record` interface over any store that can answer a
//! partition-key equality query. The crate ships two implementations -- a
//! [`DashMap`](dashmap::DashMap)-backed in-memory store for tests and local
//! use, and a DynamoDB store (behind the `dynamodb` feature) that issues a
//! `Query` with a `pk = :pk` key condition.
//!
//! The store is an injected dependency: [`ParallelFetcher::new`] takes an
//! `Arc` of the store and clones it into each spawned task, so a single
//! client (and its connection pool) is reused across every retrieval.
//!
//! # Module Organization
//!
//! - [`fetch`] - The fan-out/fan-in core ([`ParallelFetcher`])
//! - [`store`] - The [`KeyValueStore`] trait, [`StoreError`], and backends
//! - [`error`] - [`FetchError`], the aggregate error surfaced by `fetch_all`
//! - [`sort`] - The locale-aware [`sorted`] helper
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use keyfan::{ParallelFetcher, store::memory::InMemoryStore};
//!
//! # async fn example() -> Result<(), keyfan::FetchError> {
//! let store = Arc::new(InMemoryStore::new());
//! store.insert("user#1", "alice");
//! store.insert("user#2", "bob");
//!
//! let fetcher = ParallelFetcher::new(store);
//! let records = fetcher.fetch_all(["user#1", "user#2"]).await?;
//! assert_eq!(records, vec![vec!["alice"], vec!["bob"]]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fetch;
pub mod sort;
pub mod store;

// Re-exports for ergonomic access
pub use error::FetchError;
pub use fetch::ParallelFetcher;
pub use sort::sorted;
pub use store::{KeyValueStore, StoreError};
