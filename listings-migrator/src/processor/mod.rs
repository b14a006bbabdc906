//! Turns cleaned rows into staged listing and host documents.

pub mod host_mapper;
pub mod listing_mapper;

pub use host_mapper::build_host;
pub use listing_mapper::build_listing;

use bson::Document;
use listings_shared::CleanedRow;
use std::collections::HashSet;
use tracing::debug;

use crate::errors::RowError;

/// The documents produced by one row.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedRow {
    pub listing: Document,
    /// Present only for the first row of each host.
    pub host: Option<Document>,
}

/// Stateful row processor. Remembers which hosts were already staged so each
/// host gets one document per run; the first row for a host wins.
#[derive(Debug, Default)]
pub struct RowProcessor {
    seen_hosts: HashSet<i64>,
    duplicate_hosts: usize,
}

impl RowProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the documents for one row.
    ///
    /// Both documents are built before the host is marked as seen, so a row
    /// that fails leaves no trace.
    pub fn process(&mut self, row: &CleanedRow) -> Result<StagedRow, RowError> {
        let listing = build_listing(row)?.to_document()?;

        let host = match row.host_id {
            Some(host_id) if !self.seen_hosts.contains(&host_id) => {
                let host = build_host(host_id, row).to_document()?;
                self.seen_hosts.insert(host_id);
                Some(host)
            }
            Some(host_id) => {
                debug!(host_id = host_id, "Host already staged, keeping first occurrence");
                self.duplicate_hosts += 1;
                None
            }
            None => None,
        };

        Ok(StagedRow { listing, host })
    }

    /// Rows whose host had already been staged.
    pub fn duplicate_hosts(&self) -> usize {
        self.duplicate_hosts
    }

    pub fn distinct_hosts(&self) -> usize {
        self.seen_hosts.len()
    }
}
