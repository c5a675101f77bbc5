//! Catalog Client - HTTP client for the products API
//!
//! Provides typed calls for every `/products` endpoint and unwraps the
//! `{success, data, error}` envelope into [`ClientResult`].

pub mod config;
pub mod error;
pub mod http;
pub mod images;
pub mod products;

pub use config::ClientConfig;
pub use error::{CONNECT_FAILED, ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use images::ImageStatus;
pub use products::{CatalogClient, ProductApi, ProductList};

// Re-export shared types for convenience
pub use shared::{ApiResponse, Product, ProductCreate, ProductQuery, ProductUpdate};
