//! Dependency initialization and wiring for the migrator.

use std::env;
use std::sync::Arc;
use tracing::{info, warn};

use listings_repository::{DocumentStore, InMemoryStore, MongoStore};

use super::{store_config_from_env, MigrationConfig};
use crate::errors::MigrationError;
use crate::orchestrator::MigrationRunner;

/// Which store the migrator writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Connect to MongoDB.
    Mongo,
    /// Dry run: keep every document in memory and discard it on exit.
    InMemory,
}

impl StoreMode {
    /// Parse a store mode name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Some(Self::Mongo),
            "memory" | "in-memory" | "dry-run" | "dry_run" => Some(Self::InMemory),
            _ => None,
        }
    }

    /// Read `MIGRATION_STORE`. Defaults to "mongo" if not set or invalid.
    fn from_env() -> Self {
        match env::var("MIGRATION_STORE") {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "Invalid MIGRATION_STORE, defaulting to 'mongo'");
                Self::Mongo
            }),
            Err(_) => Self::Mongo,
        }
    }
}

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured runner, connected to the store.
    pub runner: MigrationRunner,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MIGRATION_STORE`: "mongo" or "memory" for a dry run (default: mongo)
    /// - `MONGO_URI`: full connection string, overrides host and port
    /// - `MONGO_HOST`: MongoDB host (default: mongodb)
    /// - `MONGO_PORT`: MongoDB port (default: 27017)
    /// - `MONGO_DATABASE`: database name (default: paris_listing)
    /// - `MONGO_COLLECTION`: listings collection (default: listings)
    /// - `HOSTS_COLLECTION`: hosts collection (default: hosts)
    /// - `MIGRATE_INPUT_PATH`: cleaned file (default: listings_Paris_clean.csv)
    /// - `BATCH_SIZE`: documents per bulk insert (default: 1000)
    pub async fn new() -> Result<Self, MigrationError> {
        let config = MigrationConfig::from_env()?;
        let store = Self::connect_store(StoreMode::from_env(), &config).await?;

        Ok(Self {
            runner: MigrationRunner::new(store, config),
        })
    }

    async fn connect_store(
        mode: StoreMode,
        config: &MigrationConfig,
    ) -> Result<Arc<dyn DocumentStore>, MigrationError> {
        match mode {
            StoreMode::InMemory => {
                info!("Dry run: documents are kept in memory and discarded on exit");
                Ok(Arc::new(InMemoryStore::new()))
            }
            StoreMode::Mongo => {
                let store_config = store_config_from_env()?;
                info!(
                    database = %store_config.database,
                    listings_collection = %config.listings_collection,
                    hosts_collection = %config.hosts_collection,
                    batch_size = config.batch_size,
                    "Connecting to MongoDB"
                );
                Ok(Arc::new(MongoStore::connect(&store_config).await?))
            }
        }
    }
}
