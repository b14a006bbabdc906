//! Data structures shared by the cleaner and the migrator.

pub mod cleaned_row;
pub mod host_document;
pub mod listing_document;
pub mod manifest;
