//! Data models
//!
//! Shared between catalog-client, catalog-mock and the admin UI.

pub mod product;

// Re-exports
pub use product::*;
