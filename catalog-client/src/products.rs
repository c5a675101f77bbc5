//! Products API
//!
//! [`ProductApi`] is the seam the admin UI talks to; [`CatalogClient`] is
//! the network implementation on top of any [`HttpClient`].

use async_trait::async_trait;
use shared::{ApiResponse, Product, ProductCreate, ProductQuery, ProductUpdate};

use crate::http::{HttpClient, NetworkHttpClient};
use crate::images::{ImageStatus, probe_image};
use crate::{ClientError, ClientResult};

/// Result of `GET /products`
#[derive(Debug, Clone, PartialEq)]
pub struct ProductList {
    pub products: Vec<Product>,
    /// Server-reported count, falls back to the row count
    pub count: usize,
}

/// Operations on the products collection
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list_products(&self, query: &ProductQuery) -> ClientResult<ProductList>;
    async fn get_product(&self, product_id: i64) -> ClientResult<Product>;
    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product>;
    async fn update_product(&self, product_id: i64, payload: &ProductUpdate)
    -> ClientResult<Product>;
    async fn delete_product(&self, product_id: i64) -> ClientResult<()>;
    async fn probe_image(&self, url: &str) -> ImageStatus;
}

/// Client for the products API
#[derive(Debug, Clone)]
pub struct CatalogClient<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> CatalogClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &H {
        &self.http
    }
}

/// Turn an envelope into its payload, or the server's error.
fn unwrap_envelope<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
    if !resp.success {
        return Err(ClientError::Api(resp.error));
    }
    resp.data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}

fn product_path(product_id: i64) -> String {
    format!("/products/{product_id}")
}

#[async_trait]
impl<H: HttpClient> ProductApi for CatalogClient<H> {
    async fn list_products(&self, query: &ProductQuery) -> ClientResult<ProductList> {
        let resp: ApiResponse<Vec<Product>> = self.http.get_with_query("/products", query).await?;
        let count = resp.count;
        let products = unwrap_envelope(resp, "product list")?;
        Ok(ProductList {
            count: count.unwrap_or(products.len()),
            products,
        })
    }

    async fn get_product(&self, product_id: i64) -> ClientResult<Product> {
        let resp: ApiResponse<Product> = self.http.get(&product_path(product_id)).await?;
        unwrap_envelope(resp, "product")
    }

    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product> {
        let resp: ApiResponse<Product> = self.http.post("/products", payload).await?;
        let product = unwrap_envelope(resp, "product")?;
        tracing::info!(product_id = product.product_id, "product created");
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: i64,
        payload: &ProductUpdate,
    ) -> ClientResult<Product> {
        let resp: ApiResponse<Product> = self.http.put(&product_path(product_id), payload).await?;
        let product = unwrap_envelope(resp, "product")?;
        tracing::info!(product_id, "product updated");
        Ok(product)
    }

    async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        let resp: ApiResponse<serde_json::Value> =
            self.http.delete(&product_path(product_id)).await?;
        if !resp.success {
            return Err(ClientError::Api(resp.error));
        }
        tracing::info!(product_id, "product deleted");
        Ok(())
    }

    async fn probe_image(&self, url: &str) -> ImageStatus {
        probe_image(&self.http, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_envelope_failure_keeps_server_error() {
        let resp: ApiResponse<Product> = ApiResponse::error("Invalid product ID format");
        match unwrap_envelope(resp, "product") {
            Err(ClientError::Api(Some(msg))) => assert_eq!(msg, "Invalid product ID format"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unwrap_envelope_missing_data() {
        let resp: ApiResponse<Product> = ApiResponse::message("ok");
        assert!(matches!(
            unwrap_envelope(resp, "product"),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
