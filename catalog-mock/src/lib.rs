//! Catalog Mock - in-memory products API
//!
//! Serves the same `/products` contract as the production backend from a
//! process-local store. Used for local development of the admin UI and as
//! the server side of the client integration tests.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod store;

pub use api::router;
pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
pub use store::{ProductKey, ProductStore};
