//! # Listings Migrator
//!
//! Loads a cleaned listings file into a document store as two collections,
//! listings and hosts, then creates the query indexes.
//!
//! ## Architecture
//!
//! 1. **Reader**: checks the manifest contract and reads typed rows
//! 2. **Processor**: builds listing and host documents, one host per id
//! 3. **Loader**: batches documents per collection and bulk-inserts them
//! 4. **Orchestrator**: coordinates the run and creates the indexes
//!
//! Row-level failures are skipped and reported in [`MigrationReport`]; store
//! failures abort the run.

pub mod config;
pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;
pub mod reader;
pub mod report;

pub use config::{Dependencies, MigrationConfig};
pub use errors::{ContractError, MigrationError, RowError};
pub use orchestrator::MigrationRunner;
pub use report::{MigrationReport, SkippedRow};

use std::path::Path;
use std::sync::Arc;

use listings_repository::DocumentStore;

/// Migrate `cleaned_path` into `store`, writing listings to `collection_name`
/// and hosts to the default hosts collection.
pub async fn migrate(
    cleaned_path: impl AsRef<Path>,
    store: Arc<dyn DocumentStore>,
    collection_name: &str,
) -> Result<MigrationReport, MigrationError> {
    let config = MigrationConfig {
        input_path: cleaned_path.as_ref().to_path_buf(),
        listings_collection: collection_name.to_string(),
        ..MigrationConfig::default()
    };
    MigrationRunner::new(store, config).run().await
}
