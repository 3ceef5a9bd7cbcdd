//! Core types for the persistence layer.

mod stored_record;

pub use stored_record::StoredRecord;
