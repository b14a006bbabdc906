//! MongoDB store implementation.
//!
//! This module provides the concrete implementation of `DocumentStore`
//! using the official MongoDB driver.

use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database, IndexModel};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::errors::StoreError;
use crate::interfaces::DocumentStore;
use crate::types::IndexSpec;

/// Application name reported to the server.
const APP_NAME: &str = "listings-migrator";

/// MongoDB-backed document store.
///
/// One client per migration run. The driver closes its connections when the
/// store is dropped; `shutdown` does it eagerly.
///
/// # Example
///
/// ```no_run
/// use listings_repository::{DocumentStore, MongoStore, StoreConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MongoStore::connect(&StoreConfig::from_host_port("localhost", 27017, "paris_listing")).await?;
/// let indexes = store.list_indexes("listings").await?;
/// store.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connect and verify the server answers a ping.
    ///
    /// # Returns
    ///
    /// * `Ok(MongoStore)` - A connected store
    /// * `Err(StoreError::ConnectionError)` - If the URI is invalid or the server is unreachable
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;
        options.app_name = Some(APP_NAME.to_string());

        let client =
            Client::with_options(options).map_err(|e| StoreError::connection(e.to_string()))?;
        let database = client.database(&config.database);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::connection(format!("ping failed: {}", e)))?;

        info!(
            uri = %config.uri,
            database = %config.database,
            "Connected to MongoDB"
        );

        Ok(Self { client, database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError> {
        if documents.is_empty() {
            return Ok(0);
        }

        let count = documents.len();
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_many(documents)
            .await
            .map_err(|e| {
                StoreError::bulk_insert(format!(
                    "insert of {} documents into '{}' failed: {}",
                    count, collection, e
                ))
            })?;

        debug!(
            collection = %collection,
            inserted = result.inserted_ids.len(),
            "Bulk insert acknowledged"
        );
        Ok(result.inserted_ids.len())
    }

    async fn create_index(&self, spec: &IndexSpec) -> Result<String, StoreError> {
        let model = IndexModel::builder().keys(spec.keys()).build();
        let result = self
            .database
            .collection::<Document>(&spec.collection)
            .create_index(model)
            .await
            .map_err(|e| {
                StoreError::index_creation(format!(
                    "index {} on '{}' failed: {}",
                    spec.name(),
                    spec.collection,
                    e
                ))
            })?;
        Ok(result.index_name)
    }

    async fn list_indexes(&self, collection: &str) -> Result<Vec<String>, StoreError> {
        self.database
            .collection::<Document>(collection)
            .list_index_names()
            .await
            .map_err(|e| StoreError::index_listing(e.to_string()))
    }

    async fn shutdown(&self) -> Result<(), StoreError> {
        self.client.clone().shutdown().await;
        debug!("MongoDB client shut down");
        Ok(())
    }
}
