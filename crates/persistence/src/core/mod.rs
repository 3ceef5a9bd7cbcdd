//! Core storage traits.
//!
//! - [`RecordStore`] - keyed CRUD over opaque resource payloads

mod storage;

pub use storage::RecordStore;
