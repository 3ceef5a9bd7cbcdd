//! HTTP request handlers for FHIR interactions.
//!
//! Resource handlers are generic over the resource type `R` and the store `S`:
//!
//! - [`read`] - Read a resource by ID
//! - [`create`] - Create a new resource
//! - [`update`] - Replace an existing resource
//! - [`delete`] - Delete a resource
//! - [`health`] - Health, liveness and readiness endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use read::read_handler;
pub use update::update_handler;
