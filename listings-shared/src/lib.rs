//! # Listings Shared
//!
//! Shared data structures for the listings pipeline. The cleaner and the
//! migrator agree on three things defined here:
//!
//! - [`columns`]: which raw columns each cleaning pass touches
//! - [`values`]: how loosely-typed cell text is coerced (dates, booleans,
//!   currency, percentages, list literals)
//! - [`types`]: the typed cleaned row, the persisted listing/host documents,
//!   and the manifest that versions the cleaned file

pub mod columns;
pub mod types;
pub mod values;

pub use types::cleaned_row::CleanedRow;
pub use types::host_document::{HostDocument, ListingsCount, ProfileInfo, ResponseInfo};
pub use types::listing_document::{
    Availability, GeoPoint, ListingDocument, Location, ReviewScores, Reviews, ScrapeInfo,
};
pub use types::manifest::{CleanManifest, MANIFEST_SCHEMA, MANIFEST_SCHEMA_VERSION};
pub use values::ListDecodeError;
