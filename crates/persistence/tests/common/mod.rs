//! Test infrastructure for the persistence layer.
//!
//! Every backend runs the same CRUD contract from [`harness`] so their
//! observable behavior stays identical.

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

pub use fixtures::*;
pub use harness::*;
