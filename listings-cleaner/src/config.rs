use std::env;
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "listings_Paris.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "listings_Paris_clean.csv";

/// Where the cleaner reads from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanerConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl CleanerConfig {
    /// Defaults overridden by `CLEAN_INPUT_PATH` and `CLEAN_OUTPUT_PATH`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            input_path: env::var("CLEAN_INPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_path),
            output_path: env::var("CLEAN_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
        }
    }
}
