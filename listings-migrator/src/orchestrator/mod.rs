//! Orchestrator for a migration run.
//!
//! Coordinates the flow: reader -> processor -> loaders -> indexes.

use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::config::MigrationConfig;
use crate::errors::MigrationError;
use crate::loader::BatchLoader;
use crate::processor::RowProcessor;
use crate::reader::read_cleaned_file;
use crate::report::{MigrationReport, SkippedRow};
use listings_repository::{DocumentStore, IndexSpec};

/// The indexes every migrated database carries.
pub fn required_indexes(listings_collection: &str, hosts_collection: &str) -> Vec<IndexSpec> {
    vec![
        IndexSpec::sphere_2d(listings_collection, "location.coordinates"),
        IndexSpec::ascending(listings_collection, "price"),
        IndexSpec::ascending(listings_collection, "host_id"),
        IndexSpec::ascending(listings_collection, "room_type"),
        IndexSpec::ascending(hosts_collection, "is_superhost"),
    ]
}

/// Runs a migration against one store.
pub struct MigrationRunner {
    store: Arc<dyn DocumentStore>,
    config: MigrationConfig,
}

impl MigrationRunner {
    pub fn new(store: Arc<dyn DocumentStore>, config: MigrationConfig) -> Self {
        Self { store, config }
    }

    /// Migrate the configured input file.
    pub async fn run(&self) -> Result<MigrationReport, MigrationError> {
        self.run_file(&self.config.input_path).await
    }

    /// Migrate `path` and close the store connection.
    ///
    /// On failure the error is logged and returned; the store is released when
    /// the last handle to it is dropped.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn run_file(&self, path: &Path) -> Result<MigrationReport, MigrationError> {
        match self.migrate(path).await {
            Ok(report) => {
                self.store.shutdown().await?;
                info!(
                    listings = report.listings_inserted,
                    hosts = report.hosts_inserted,
                    skipped = report.skipped_count(),
                    "Migration completed successfully"
                );
                Ok(report)
            }
            Err(e) => {
                error!(error = %e, "Migration failed");
                Err(e)
            }
        }
    }

    async fn migrate(&self, path: &Path) -> Result<MigrationReport, MigrationError> {
        let file = read_cleaned_file(path)?;

        let mut report = MigrationReport {
            rows_read: file.len(),
            ..MigrationReport::default()
        };
        let mut processor = RowProcessor::new();
        let mut listings = BatchLoader::new(
            self.store.clone(),
            &self.config.listings_collection,
            "listing",
            self.config.batch_size,
        );
        let mut hosts = BatchLoader::new(
            self.store.clone(),
            &self.config.hosts_collection,
            "host",
            self.config.batch_size,
        );

        for (ordinal, row) in file.rows.into_iter().enumerate() {
            let staged = row.and_then(|row| processor.process(&row));
            match staged {
                Ok(staged) => {
                    listings.push(staged.listing).await?;
                    if let Some(host) = staged.host {
                        hosts.push(host).await?;
                    }
                }
                Err(reason) => {
                    warn!(row = ordinal, error = %reason, "Error processing row");
                    report.skipped.push(SkippedRow { ordinal, reason });
                }
            }
        }

        listings.finish().await?;
        hosts.finish().await?;

        report.listings_inserted = listings.inserted();
        report.hosts_inserted = hosts.inserted();
        report.listing_flushes = listings.flushes().to_vec();
        report.host_flushes = hosts.flushes().to_vec();
        report.duplicate_host_rows = processor.duplicate_hosts();

        report.indexes_created = self.create_indexes().await?;
        self.verify_indexes().await?;

        Ok(report)
    }

    async fn create_indexes(&self) -> Result<Vec<String>, MigrationError> {
        let mut names = Vec::new();
        for spec in required_indexes(&self.config.listings_collection, &self.config.hosts_collection) {
            names.push(self.store.create_index(&spec).await?);
        }
        info!(count = names.len(), "Created necessary indexes");
        Ok(names)
    }

    /// Log the indexes each collection ends up with.
    async fn verify_indexes(&self) -> Result<(), MigrationError> {
        for collection in [&self.config.listings_collection, &self.config.hosts_collection] {
            let indexes = self.store.list_indexes(collection).await?;
            info!(
                collection = %collection,
                count = indexes.len(),
                indexes = ?indexes,
                "Verified indexes"
            );
        }
        Ok(())
    }
}
