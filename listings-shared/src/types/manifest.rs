//! Versioned contract between the cleaner's output and the migrator's input.
//!
//! The cleaner writes a JSON manifest next to every cleaned file. The migrator
//! refuses to load a cleaned file whose manifest is missing or describes a
//! different schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Schema name recorded in every manifest.
pub const MANIFEST_SCHEMA: &str = "listings-clean";

/// Current version of the cleaned file encoding.
///
/// Bump this when the text encoding of dates, booleans, numbers or lists changes.
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Suffix appended to the cleaned file's path to locate its manifest.
pub const MANIFEST_SUFFIX: &str = ".manifest.json";

/// Description of a cleaned listings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleanManifest {
    pub schema: String,
    pub schema_version: u32,
    /// Header of the cleaned file, in file order.
    pub columns: Vec<String>,
    pub row_count: usize,
    pub created_at: DateTime<Utc>,
}

impl CleanManifest {
    /// Create a manifest for the current schema version.
    pub fn new(columns: Vec<String>, row_count: usize) -> Self {
        Self {
            schema: MANIFEST_SCHEMA.to_string(),
            schema_version: MANIFEST_SCHEMA_VERSION,
            columns,
            row_count,
            created_at: Utc::now(),
        }
    }

    /// Path of the manifest that accompanies `csv_path`.
    pub fn path_for(csv_path: &Path) -> PathBuf {
        let mut path = OsString::from(csv_path.as_os_str());
        path.push(MANIFEST_SUFFIX);
        PathBuf::from(path)
    }

    /// Whether this manifest was written for the schema this build understands.
    pub fn is_current(&self) -> bool {
        self.schema == MANIFEST_SCHEMA && self.schema_version == MANIFEST_SCHEMA_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path_for() {
        let path = CleanManifest::path_for(Path::new("/data/listings_Paris_clean.csv"));
        assert_eq!(
            path,
            PathBuf::from("/data/listings_Paris_clean.csv.manifest.json")
        );
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let manifest = CleanManifest::new(vec!["id".to_string(), "price".to_string()], 2);
        assert!(manifest.is_current());

        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: CleanManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_manifest_is_current_rejects_other_versions() {
        let mut manifest = CleanManifest::new(vec![], 0);
        manifest.schema_version = MANIFEST_SCHEMA_VERSION + 1;
        assert!(!manifest.is_current());

        let mut manifest = CleanManifest::new(vec![], 0);
        manifest.schema = "something-else".to_string();
        assert!(!manifest.is_current());
    }
}
