//! SQLite backend implementation.
//!
//! Supports in-memory databases (handy for tests) and file-based databases
//! (for development and small deployments).
//!
//! # Example
//!
//! ```no_run
//! use carebase_persistence::backends::sqlite::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::open("./data/carebase.db")?;
//! store.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE records (
//!     resource_type TEXT NOT NULL,
//!     id TEXT NOT NULL,
//!     payload TEXT NOT NULL,  -- canonical JSON
//!     PRIMARY KEY (resource_type, id)
//! );
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteStore, SqliteStoreConfig};
pub use schema::SCHEMA_VERSION;
