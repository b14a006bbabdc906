//! In-memory document store for development and testing.

use async_trait::async_trait;
use bson::{Bson, Document};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use tracing::debug;

use crate::errors::StoreError;
use crate::interfaces::DocumentStore;
use crate::types::IndexSpec;

/// Name of the index every collection gets implicitly.
const ID_INDEX: &str = "_id_";

#[derive(Default)]
struct Collection {
    documents: Vec<Document>,
    ids: HashSet<String>,
    indexes: Vec<String>,
}

/// Keeps every collection in memory and records each bulk insert call.
///
/// Like MongoDB, a batch carrying an `_id` that already exists (in the
/// collection or earlier in the same batch) is rejected as a whole.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Collection>>,
    insert_calls: Mutex<Vec<(String, usize)>>,
    failing_collection: Option<String>,
    failing_index_collection: Option<String>,
    shut_down: Mutex<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose inserts into `collection` always fail.
    pub fn failing_on(collection: impl Into<String>) -> Self {
        Self {
            failing_collection: Some(collection.into()),
            ..Self::default()
        }
    }

    /// A store whose index creation on `collection` always fails.
    pub fn failing_indexes_on(collection: impl Into<String>) -> Self {
        Self {
            failing_index_collection: Some(collection.into()),
            ..Self::default()
        }
    }

    /// Documents of a collection, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|c| c.documents.clone())
            .unwrap_or_default()
    }

    /// Find a document by `_id`.
    pub fn find_by_id(&self, collection: &str, id: impl Into<Bson>) -> Option<Document> {
        let id = id.into();
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|c| c.documents.iter().find(|d| d.get("_id") == Some(&id)).cloned())
    }

    /// Every successful `insert_many` call as `(collection, batch size)`.
    pub fn insert_calls(&self) -> Vec<(String, usize)> {
        self.insert_calls.lock().unwrap().clone()
    }

    /// Batch sizes of the successful inserts into one collection.
    pub fn batch_sizes(&self, collection: &str) -> Vec<usize> {
        self.insert_calls()
            .into_iter()
            .filter(|(name, _)| name == collection)
            .map(|(_, size)| size)
            .collect()
    }

    pub fn is_shut_down(&self) -> bool {
        *self.shut_down.lock().unwrap()
    }

    fn check_open(&self) -> Result<(), StoreError> {
        if self.is_shut_down() {
            return Err(StoreError::connection("store has been shut down"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError> {
        self.check_open()?;
        if self.failing_collection.as_deref() == Some(collection) {
            return Err(StoreError::bulk_insert(format!(
                "insert into '{}' rejected",
                collection
            )));
        }

        let mut collections = self.collections.lock().unwrap();
        let target = collections.entry(collection.to_string()).or_default();

        let mut batch_ids = HashSet::new();
        for document in &documents {
            if let Some(id) = document.get("_id") {
                let key = id.to_string();
                if target.ids.contains(&key) || !batch_ids.insert(key) {
                    return Err(StoreError::bulk_insert(format!(
                        "duplicate key {} in '{}'",
                        id, collection
                    )));
                }
            }
        }

        let count = documents.len();
        target.ids.extend(batch_ids);
        target.documents.extend(documents);
        self.insert_calls
            .lock()
            .unwrap()
            .push((collection.to_string(), count));

        debug!(collection = %collection, count = count, "Stored documents in memory");
        Ok(count)
    }

    async fn create_index(&self, spec: &IndexSpec) -> Result<String, StoreError> {
        self.check_open()?;
        if self.failing_index_collection.as_deref() == Some(spec.collection.as_str()) {
            return Err(StoreError::index_creation(format!(
                "index {} on '{}' rejected",
                spec.name(),
                spec.collection
            )));
        }
        let name = spec.name();
        let mut collections = self.collections.lock().unwrap();
        let target = collections.entry(spec.collection.clone()).or_default();
        if !target.indexes.contains(&name) {
            target.indexes.push(name.clone());
        }
        Ok(name)
    }

    async fn list_indexes(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        self.check_open()?;
        let collections = self.collections.lock().unwrap();
        let mut names = vec![ID_INDEX.to_string()];
        if let Some(target) = collections.get(collection) {
            names.extend(target.indexes.iter().cloned());
        }
        Ok(names)
    }

    async fn shutdown(&self) -> Result<(), StoreError> {
        *self.shut_down.lock().unwrap() = true;
        Ok(())
    }
}
