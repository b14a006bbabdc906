//! Error types for the cleaner.

use thiserror::Error;

/// Errors that abort a cleaning run. There is no partial success: when one of
/// these is returned the output file has not been written.
#[derive(Error, Debug)]
pub enum CleanError {
    /// A column that a pass requires is not in the input.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A price is still not a number once currency symbols are stripped.
    #[error("Invalid price at row {row}: '{value}'")]
    InvalidPrice { row: usize, value: String },

    /// An amenities value could not be decoded into a list.
    #[error("Invalid amenities at row {row}: {reason}")]
    InvalidAmenities { row: usize, reason: String },

    /// Reading or writing the CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the manifest failed.
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl CleanError {
    /// Create a missing column error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }

    /// Create an invalid price error.
    pub fn invalid_price(row: usize, value: impl Into<String>) -> Self {
        Self::InvalidPrice {
            row,
            value: value.into(),
        }
    }

    /// Create an invalid amenities error.
    pub fn invalid_amenities(row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidAmenities {
            row,
            reason: reason.into(),
        }
    }
}
