//! DynamoDB key-value store.
//!
//! [`DynamoDbStore`] implements [`KeyValueStore`] using Amazon DynamoDB as
//! the underlying store. A retrieval maps to one `Query` call with a
//! partition-key equality condition (`#pk = :pk`), returning every item in
//! the partition.
//!
//! # Table Shape
//!
//! The store only assumes a string partition-key attribute (default name
//! `pk`, configurable via [`with_partition_key`](DynamoDbStore::with_partition_key)).
//! Items are returned as raw attribute maps; interpreting them is the
//! caller's concern.
//!
//! # Relationship to the Fetcher
//!
//! This store is a dumb query adapter: it holds one SDK client (and its
//! connection pool) and answers single-key queries. Fan-out across keys
//! lives in [`ParallelFetcher`](crate::fetch::ParallelFetcher), which shares
//! one `DynamoDbStore` across all spawned retrieval tasks.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use keyfan::ParallelFetcher;
//! use keyfan::store::dynamodb::DynamoDbStore;
//!
//! # async fn example() {
//! // From environment (standard AWS config chain):
//! let store = DynamoDbStore::from_env().await;
//! let fetcher = ParallelFetcher::new(Arc::new(store));
//!
//! // With a pre-built client:
//! let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//! let client = aws_sdk_dynamodb::Client::new(&config);
//! let store = DynamoDbStore::new(client, "orders");
//! # }
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::store::{KeyValueStore, StoreError};

/// One DynamoDB item, as the raw attribute map returned by `Query`.
pub type Item = HashMap<String, AttributeValue>;

/// DynamoDB-backed [`KeyValueStore`] querying by partition key.
///
/// A retrieval issues `Query` with `#pk = :pk` and returns the matching
/// items verbatim. An empty partition yields an empty vector, not an error.
///
/// # Examples
///
/// ```rust,no_run
/// use keyfan::store::dynamodb::DynamoDbStore;
///
/// # async fn example() {
/// let store = DynamoDbStore::from_env_with_table("orders").await;
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    partition_key: String,
}

impl DynamoDbStore {
    /// Creates a store with a pre-built DynamoDB client.
    ///
    /// The table must already exist with a string partition-key attribute
    /// named `pk` (override with
    /// [`with_partition_key`](Self::with_partition_key)).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use keyfan::store::dynamodb::DynamoDbStore;
    ///
    /// # async fn example() {
    /// let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    /// let client = aws_sdk_dynamodb::Client::new(&config);
    /// let store = DynamoDbStore::new(client, "orders");
    /// # }
    /// ```
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            partition_key: "pk".to_string(),
        }
    }

    /// Creates a store using the standard AWS SDK config chain.
    ///
    /// Loads credentials and region from environment variables, AWS
    /// profiles, or IMDS (for EC2/Lambda). Uses `"keyfan"` as the default
    /// table name.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use keyfan::store::dynamodb::DynamoDbStore;
    ///
    /// # async fn example() {
    /// let store = DynamoDbStore::from_env().await;
    /// # }
    /// ```
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        Self::new(client, "keyfan")
    }

    /// Creates a store from the standard AWS SDK config chain with a custom
    /// table name.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use keyfan::store::dynamodb::DynamoDbStore;
    ///
    /// # async fn example() {
    /// let store = DynamoDbStore::from_env_with_table("orders").await;
    /// # }
    /// ```
    pub async fn from_env_with_table(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);
        Self::new(client, table_name)
    }

    /// Overrides the partition-key attribute name (default `"pk"`).
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use keyfan::store::dynamodb::DynamoDbStore;
    ///
    /// # async fn example() {
    /// let store = DynamoDbStore::from_env().await.with_partition_key("customer_id");
    /// # }
    /// ```
    #[must_use]
    pub fn with_partition_key(mut self, attribute: impl Into<String>) -> Self {
        self.partition_key = attribute.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Maps an AWS SDK query error to a [`StoreError`], distinguishing
/// throttling from other backend failures.
fn map_query_error(err: SdkError<QueryError>, key: &str) -> StoreError {
    if err
        .as_service_error()
        .is_some_and(QueryError::is_provisioned_throughput_exceeded_exception)
    {
        return StoreError::Throttled {
            key: key.to_string(),
        };
    }
    StoreError::Backend {
        message: format!("DynamoDB query failed for key {key}: {err}"),
        source: Some(Box::new(err)),
    }
}

// ---------------------------------------------------------------------------
// KeyValueStore implementation
// ---------------------------------------------------------------------------

#[async_trait]
impl KeyValueStore for DynamoDbStore {
    type Record = Vec<Item>;

    async fn retrieve(&self, key: &str) -> Result<Self::Record, StoreError> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", &self.partition_key)
            .expression_attribute_values(":pk", AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| map_query_error(e, key))?;

        Ok(result.items.unwrap_or_default())
    }
}
