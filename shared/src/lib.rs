//! Shared types for the catalog workspace
//!
//! Product model, request payloads, the uniform response envelope and the
//! fixed option lists used by the admin forms. Both `catalog-client` and
//! `catalog-mock` speak these types on the wire.

pub mod catalog;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::{Product, ProductCreate, ProductQuery, ProductUpdate};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
