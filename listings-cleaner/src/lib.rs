//! # Listings Cleaner
//!
//! Turns a raw listings export into a cleaned CSV plus a manifest describing it.
//!
//! The passes run in a fixed order:
//!
//! 1. fill missing optional text and numeric values
//! 2. parse dates
//! 3. map `t`/`f` flags to booleans
//! 4. strip currency formatting from prices
//! 5. decode amenity list literals
//! 6. drop rows with out-of-range coordinates
//! 7. turn response-rate percentages into fractions
//! 8. add American-spelled neighbourhood columns
//!
//! Price and amenity failures abort the run; date and flag failures become nulls.

pub mod cleaner;
pub mod config;
pub mod errors;
pub mod passes;
pub mod report;
pub mod table;

pub use cleaner::{clean, clean_table, clean_with_report};
pub use config::CleanerConfig;
pub use errors::CleanError;
pub use report::CleanReport;
pub use table::{Cell, Table};
