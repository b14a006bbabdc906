//! # Listings Repository
//!
//! This crate provides the abstraction the migrator writes through. It includes
//! the `DocumentStore` trait, its error type, index specifications, a MongoDB
//! implementation and an in-memory implementation used by tests and dry runs.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod mongo;
pub mod types;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use interfaces::DocumentStore;
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use types::{IndexKind, IndexSpec};
