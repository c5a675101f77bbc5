use std::path::PathBuf;

/// catalog-mock configuration, read from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port
    pub port: u16,
    /// Optional JSON file with an array of products to preload
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            seed_path: std::env::var("CATALOG_SEED").ok().map(PathBuf::from),
        }
    }
}
