use crate::errors::RowError;

/// A row left out of the migration.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 0-based position among the data rows of the cleaned file.
    pub ordinal: usize,
    pub reason: RowError,
}

/// Summary of a completed migration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationReport {
    pub rows_read: usize,
    pub listings_inserted: usize,
    pub hosts_inserted: usize,
    /// Rows whose host had already been seen earlier in the file.
    pub duplicate_host_rows: usize,
    pub skipped: Vec<SkippedRow>,
    pub listing_flushes: Vec<usize>,
    pub host_flushes: Vec<usize>,
    /// Indexes created by the run, in creation order.
    pub indexes_created: Vec<String>,
}

impl MigrationReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
