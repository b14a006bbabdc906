//! Document store trait definition.

use async_trait::async_trait;
use bson::Document;

use crate::errors::StoreError;
use crate::types::IndexSpec;

/// Abstracts the underlying document store (MongoDB, in-memory, ...).
///
/// Implementations are injected into the migrator so that tests can run
/// against an in-memory store. All methods return `Result<T, StoreError>`.
///
/// # Write semantics
///
/// There is no update path. Documents are inserted once, in batches, and a
/// batch either goes in as a whole or the call fails.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a batch of documents into `collection`.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of documents inserted
    /// * `Err(StoreError::BulkInsertError)` - If the store rejected the batch
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError>;

    /// Create an index. Creating an index that already exists with the same
    /// keys is a no-op.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The index name
    /// * `Err(StoreError::IndexCreationError)` - If the store rejected the index
    async fn create_index(&self, spec: &IndexSpec) -> Result<String, StoreError>;

    /// List the index names of a collection.
    async fn list_indexes(&self, collection: &str) -> Result<Vec<String>, StoreError>;

    /// Release the connection. The store must not be used afterwards.
    async fn shutdown(&self) -> Result<(), StoreError>;
}
