//! Document store error types.

use thiserror::Error;

/// Unified errors from document store operations.
///
/// Used by the `DocumentStore` trait and every implementation of it.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Failed to establish or verify the connection to the store.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A bulk insert was rejected. Nothing from the batch should be assumed written.
    #[error("Bulk insert error: {0}")]
    BulkInsertError(String),

    /// Failed to create an index.
    #[error("Index creation error: {0}")]
    IndexCreationError(String),

    /// Failed to list the indexes of a collection.
    #[error("Index listing error: {0}")]
    IndexListingError(String),
}

impl StoreError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a bulk insert error.
    pub fn bulk_insert(msg: impl Into<String>) -> Self {
        Self::BulkInsertError(msg.into())
    }

    /// Create an index creation error.
    pub fn index_creation(msg: impl Into<String>) -> Self {
        Self::IndexCreationError(msg.into())
    }

    /// Create an index listing error.
    pub fn index_listing(msg: impl Into<String>) -> Self {
        Self::IndexListingError(msg.into())
    }
}
