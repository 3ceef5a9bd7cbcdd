//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test servers over in-memory, SQLite and failing stores
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
