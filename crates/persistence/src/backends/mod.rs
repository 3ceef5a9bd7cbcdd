//! Database backend implementations.
//!
//! This module contains implementations of [`RecordStore`](crate::core::RecordStore).
//! Backends other than the in-memory store are gated behind a feature flag.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | Non-persistent map, the default server mode |
//! | SQLite | `sqlite` | Lightweight embedded database, file or `:memory:` |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! use carebase_persistence::backends::sqlite::SqliteStore;
//!
//! # #[cfg(feature = "sqlite")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory SQLite store
//! let store = SqliteStore::in_memory()?;
//!
//! // Or use a file-based database
//! let store = SqliteStore::open("./data/carebase.db")?;
//! store.init_schema()?;
//! # Ok(())
//! # }
//! ```

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;
