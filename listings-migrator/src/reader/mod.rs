//! Reads a cleaned file after checking it against its manifest.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use listings_shared::columns::REQUIRED_MIGRATION_COLUMNS;
use listings_shared::{CleanManifest, CleanedRow, MANIFEST_SCHEMA, MANIFEST_SCHEMA_VERSION};
use tracing::{debug, info};

use crate::errors::{ContractError, MigrationError, RowError};

/// A cleaned file, validated and fully loaded.
#[derive(Debug)]
pub struct CleanedFile {
    pub manifest: CleanManifest,
    /// One entry per data row, in file order.
    pub rows: Vec<Result<CleanedRow, RowError>>,
}

impl CleanedFile {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Load the manifest next to `path` and check it describes a file this build can read.
pub fn load_manifest(path: &Path) -> Result<CleanManifest, ContractError> {
    let manifest_path = CleanManifest::path_for(path);
    let manifest_display = manifest_path.display().to_string();

    let text = fs::read_to_string(&manifest_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ContractError::MissingManifest(manifest_display.clone()),
        _ => ContractError::UnreadableManifest {
            path: manifest_display.clone(),
            reason: e.to_string(),
        },
    })?;
    let manifest: CleanManifest =
        serde_json::from_str(&text).map_err(|e| ContractError::UnreadableManifest {
            path: manifest_display.clone(),
            reason: e.to_string(),
        })?;

    if !manifest.is_current() {
        return Err(ContractError::UnsupportedSchema {
            schema: manifest.schema,
            version: manifest.schema_version,
            expected_schema: MANIFEST_SCHEMA.to_string(),
            expected_version: MANIFEST_SCHEMA_VERSION,
        });
    }
    for column in REQUIRED_MIGRATION_COLUMNS {
        if !manifest.columns.iter().any(|c| c == column) {
            return Err(ContractError::missing_column(*column));
        }
    }

    debug!(path = %manifest_display, columns = manifest.columns.len(), "Manifest accepted");
    Ok(manifest)
}

/// Validate the contract, then read every row of the cleaned file.
///
/// I/O faults are fatal. A row whose cells cannot be coerced is returned as a
/// `RowError` in its slot so the caller can skip it.
pub fn read_cleaned_file(path: &Path) -> Result<CleanedFile, MigrationError> {
    let manifest = load_manifest(path)?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header != manifest.columns {
        return Err(ContractError::HeaderMismatch {
            expected: manifest.columns,
            found: header,
        }
        .into());
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<CleanedRow>() {
        match result {
            Ok(row) => rows.push(Ok(row)),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => rows.push(Err(RowError::malformed(e.to_string()))),
        }
    }

    info!(count = rows.len(), path = %path.display(), "Loaded records");
    Ok(CleanedFile { manifest, rows })
}
