//! Key-value store trait, error taxonomy, and backends.
//!
//! # Architecture
//!
//! The retrieval side has two layers:
//!
//! 1. **[`KeyValueStore`]** -- The consumed interface: one asynchronous
//!    `retrieve(key)` operation against an external store. The fetcher in
//!    [`fetch`](crate::fetch) depends only on this trait.
//!
//! 2. **Backends** -- Concrete stores implementing the trait. They answer a
//!    partition-key equality query and contain no fan-out logic.
//!
//! # Backends
//!
//! - [`InMemoryStore`](crate::store::memory::InMemoryStore) -- Thread-safe
//!   in-memory store using `DashMap`, for tests and local development.
//! - [`DynamoDbStore`](crate::store::dynamodb::DynamoDbStore) -- DynamoDB
//!   `Query` with a `pk = :pk` key condition, for production AWS
//!   deployments. Available behind the `dynamodb` feature flag.
//!
//! # Record Type
//!
//! The record type is an associated type, not a fixed structure: the external
//! store's schema decides what a record is. The DynamoDB backend uses the
//! raw item maps returned by `Query`; the in-memory backend is generic over
//! any cloneable value.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod memory;

use async_trait::async_trait;

/// Errors that can occur during a single retrieval against the store.
///
/// These are low-level failures from the backend. The fetcher does not
/// classify them further; it wraps whichever one it observes first in a
/// [`FetchError::Retrieval`](crate::error::FetchError::Retrieval) and fails
/// the aggregate.
///
/// # Examples
///
/// ```
/// use keyfan::StoreError;
///
/// let err = StoreError::NotFound { key: "user#42".to_string() };
/// assert!(err.to_string().contains("user#42"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store has no partition for the given key and the backend treats
    /// that as an error rather than an empty result.
    #[error("key not found: {key}")]
    NotFound {
        /// The key that was not found.
        key: String,
    },

    /// The store rejected the request due to throttling (e.g. DynamoDB
    /// `ProvisionedThroughputExceededException`).
    #[error("request throttled for key {key}")]
    Throttled {
        /// The key whose query was throttled.
        key: String,
    },

    /// An I/O or backend-specific error occurred (network failure, timeout,
    /// malformed response).
    #[error("backend error: {message}")]
    Backend {
        /// Human-readable description of the error.
        message: String,
        /// The underlying error, if available. Accessible via
        /// [`std::error::Error::source()`].
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Asynchronous partition-key retrieval against an external store.
///
/// One operation: [`retrieve`](KeyValueStore::retrieve) answers a
/// partition-key equality query with the matching record(s). What a record
/// *is* belongs to the store's schema, so it is an associated type rather
/// than a concrete struct.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: the fetcher shares one store
/// instance (behind an `Arc`) across every spawned retrieval task.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// The value returned for one key. For stores where a partition key
    /// matches multiple items (DynamoDB), this is the collection of items;
    /// "zero matches" is then an empty collection, not an error.
    type Record: Send + 'static;

    /// Retrieves the record(s) for one partition key.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the backend treats a missing key as an
    ///   error.
    /// - [`StoreError::Throttled`] if the backend rejected the query due to
    ///   rate limiting.
    /// - [`StoreError::Backend`] on I/O or backend-specific failures.
    async fn retrieve(&self, key: &str) -> Result<Self::Record, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::NotFound {
            key: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "key not found: abc");

        let err = StoreError::Throttled {
            key: "hot".to_string(),
        };
        assert_eq!(err.to_string(), "request throttled for key hot");

        let err = StoreError::Backend {
            message: "connection reset".to_string(),
            source: None,
        };
        assert_eq!(err.to_string(), "backend error: connection reset");
    }

    #[test]
    fn backend_error_exposes_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline");
        let err = StoreError::Backend {
            message: "query timed out".to_string(),
            source: Some(Box::new(io)),
        };
        let source = std::error::Error::source(&err).expect("source should be set");
        assert!(source.to_string().contains("deadline"));
    }
}
