//! Carebase Persistence Layer
//!
//! This crate provides the key-value record store behind the Carebase FHIR
//! server. Each record is the canonical JSON of one resource, keyed by
//! `(resource_type, id)`. The store never looks inside the payload; encoding
//! and validation belong to the codec in `carebase-fhir`.
//!
//! # Backends
//!
//! - [`InMemoryStore`](backends::memory::InMemoryStore) - non-persistent,
//!   always available
//! - `SqliteStore` (feature `sqlite`, enabled by default) - file-based or
//!   `:memory:` SQLite behind an r2d2 pool
//!
//! # Quick Start
//!
//! ```
//! use carebase_persistence::backends::memory::InMemoryStore;
//! use carebase_persistence::core::RecordStore;
//! use carebase_persistence::types::StoredRecord;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), carebase_persistence::StorageError> {
//! let store = InMemoryStore::new();
//!
//! let record = StoredRecord::new("Patient", "abc", r#"{"resourceType":"Patient","id":"abc"}"#);
//! store.insert(record).await?;
//!
//! let read = store.get("Patient", "abc").await?;
//! assert_eq!(read.unwrap().id(), "abc");
//!
//! let updated = StoredRecord::new("Patient", "abc", r#"{"resourceType":"Patient","id":"abc","active":true}"#);
//! assert!(store.replace(updated).await?);
//!
//! assert!(store.delete("Patient", "abc").await?);
//! assert_eq!(store.get("Patient", "abc").await?, None);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use core::RecordStore;
pub use error::{StorageError, StorageResult};
pub use types::StoredRecord;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
