use std::sync::Arc;

use anyhow::Context;
use catalog_mock::{AppState, Config, ProductStore, router};
use shared::Product;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_mock=info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();

    let store = match &config.seed_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading seed file {}", path.display()))?;
            let products: Vec<Product> =
                serde_json::from_str(&raw).context("parsing seed file")?;
            info!(count = products.len(), "Loaded seed products");
            ProductStore::with_products(products)
        }
        None => ProductStore::default(),
    };

    let app = router(Arc::new(AppState::new(store)));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("catalog-mock listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
