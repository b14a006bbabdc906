//! Batches documents per collection and bulk-inserts them.

use bson::Document;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::errors::MigrationError;
use listings_repository::DocumentStore;

/// Pending documents for one collection.
///
/// A batch is flushed with a single `insert_many` once it reaches
/// `batch_size`; [`BatchLoader::finish`] flushes whatever is left. Insert
/// failures are returned as-is, nothing is retried.
pub struct BatchLoader {
    store: Arc<dyn DocumentStore>,
    collection: String,
    /// Singular noun used in log lines, e.g. "listing".
    label: &'static str,
    batch_size: usize,
    pending: Vec<Document>,
    flushes: Vec<usize>,
    inserted: usize,
}

impl BatchLoader {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
        label: &'static str,
        batch_size: usize,
    ) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            store,
            collection: collection.into(),
            label,
            batch_size,
            pending: Vec::with_capacity(batch_size),
            flushes: Vec::new(),
            inserted: 0,
        }
    }

    /// Stage a document, flushing when the batch is full.
    pub async fn push(&mut self, document: Document) -> Result<(), MigrationError> {
        self.pending.push(document);
        if self.pending.len() >= self.batch_size {
            let count = self.flush().await?;
            info!(
                collection = %self.collection,
                "Inserted {} {} documents", count, self.label
            );
        }
        Ok(())
    }

    /// Flush the final partial batch, if any.
    pub async fn finish(&mut self) -> Result<(), MigrationError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let count = self.flush().await?;
        info!(
            collection = %self.collection,
            "Inserted final batch of {} {} documents", count, self.label
        );
        Ok(())
    }

    #[instrument(skip(self), fields(collection = %self.collection))]
    async fn flush(&mut self) -> Result<usize, MigrationError> {
        let batch: Vec<Document> = self.pending.drain(..).collect();
        debug!(count = batch.len(), "Flushing documents");

        let count = self.store.insert_many(&self.collection, batch).await?;
        self.flushes.push(count);
        self.inserted += count;
        Ok(count)
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Sizes of every flush so far, in order.
    pub fn flushes(&self) -> &[usize] {
        &self.flushes
    }

    pub fn inserted(&self) -> usize {
        self.inserted
    }
}
