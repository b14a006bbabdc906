//! Configuration for a migration run.

pub mod dependencies;

pub use dependencies::{Dependencies, StoreMode};

use std::env;
use std::path::PathBuf;

use listings_repository::config::{DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT};
use listings_repository::StoreConfig;

use crate::errors::MigrationError;

/// Default cleaned input file.
pub const DEFAULT_INPUT_PATH: &str = "listings_Paris_clean.csv";

/// Default collection for listing documents.
pub const DEFAULT_LISTINGS_COLLECTION: &str = "listings";

/// Collection for host documents.
pub const DEFAULT_HOSTS_COLLECTION: &str = "hosts";

/// Documents per bulk insert.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Fixed log file written next to the working directory.
pub const DEFAULT_LOG_FILE: &str = "data_migration.log";

/// Settings for one migration run.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationConfig {
    pub input_path: PathBuf,
    pub listings_collection: String,
    pub hosts_collection: String,
    pub batch_size: usize,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            listings_collection: DEFAULT_LISTINGS_COLLECTION.to_string(),
            hosts_collection: DEFAULT_HOSTS_COLLECTION.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl MigrationConfig {
    /// Defaults overridden by `MIGRATE_INPUT_PATH`, `MONGO_COLLECTION`,
    /// `HOSTS_COLLECTION` and `BATCH_SIZE`.
    pub fn from_env() -> Result<Self, MigrationError> {
        let defaults = Self::default();
        let batch_size = match env::var("BATCH_SIZE") {
            Ok(raw) => parse_batch_size(&raw)?,
            Err(_) => defaults.batch_size,
        };

        Ok(Self {
            input_path: env::var("MIGRATE_INPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_path),
            listings_collection: env::var("MONGO_COLLECTION")
                .unwrap_or(defaults.listings_collection),
            hosts_collection: env::var("HOSTS_COLLECTION").unwrap_or(defaults.hosts_collection),
            batch_size,
        })
    }
}

/// Store settings from `MONGO_URI`, or `MONGO_HOST`/`MONGO_PORT`, and `MONGO_DATABASE`.
pub fn store_config_from_env() -> Result<StoreConfig, MigrationError> {
    let database = env::var("MONGO_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());
    if let Ok(uri) = env::var("MONGO_URI") {
        return Ok(StoreConfig::from_uri(uri, database));
    }

    let host = env::var("MONGO_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = match env::var("MONGO_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| MigrationError::config(format!("Invalid MONGO_PORT '{}': {}", raw, e)))?,
        Err(_) => DEFAULT_PORT,
    };
    Ok(StoreConfig::from_host_port(&host, port, database))
}

/// Path of the migration log file, from `MIGRATION_LOG_FILE`.
pub fn log_file_from_env() -> PathBuf {
    env::var("MIGRATION_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE))
}

fn parse_batch_size(raw: &str) -> Result<usize, MigrationError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(MigrationError::config("BATCH_SIZE must be at least 1")),
        Ok(size) => Ok(size),
        Err(e) => Err(MigrationError::config(format!(
            "Invalid BATCH_SIZE '{}': {}",
            raw, e
        ))),
    }
}
