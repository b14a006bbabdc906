//! Error types for the migrator.

use listings_repository::StoreError;
use thiserror::Error;

/// Errors that abort a migration run.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// The cleaned file does not match the contract this build reads.
    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    /// The document store rejected an operation.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The cleaned file could not be read.
    #[error("Read error: {0}")]
    Read(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MigrationError {
    /// Create a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<std::io::Error> for MigrationError {
    fn from(err: std::io::Error) -> Self {
        Self::Read(err.to_string())
    }
}

impl From<csv::Error> for MigrationError {
    fn from(err: csv::Error) -> Self {
        Self::Read(err.to_string())
    }
}

/// Mismatches between a cleaned file and the manifest contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// No manifest next to the cleaned file.
    #[error("Manifest not found at {0}")]
    MissingManifest(String),

    /// The manifest exists but is not valid JSON for a manifest.
    #[error("Unreadable manifest at {path}: {reason}")]
    UnreadableManifest { path: String, reason: String },

    /// The manifest was written for another schema or version.
    #[error("Unsupported schema '{schema}' version {version}, expected '{expected_schema}' version {expected_version}")]
    UnsupportedSchema {
        schema: String,
        version: u32,
        expected_schema: String,
        expected_version: u32,
    },

    /// The header of the cleaned file differs from the manifest's column list.
    #[error("Header does not match manifest: expected {expected:?}, found {found:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A column the migrator needs is absent.
    #[error("Required column missing: {0}")]
    MissingColumn(String),
}

impl ContractError {
    /// Create a missing column error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }
}

/// Reasons a single row is skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    /// A field the documents cannot be built without is empty.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A cell could not be coerced to its column type.
    #[error("Malformed row: {0}")]
    Malformed(String),

    /// The built document could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl RowError {
    /// Create a missing field error.
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField(name.into())
    }

    /// Create a malformed row error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

impl From<bson::ser::Error> for RowError {
    fn from(err: bson::ser::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
