//! Product API Handlers

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::{ApiResponse, Product, ProductQuery};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::store::{NewProduct, ProductKey, ProductPatch, UpdateOutcome};

/// Raw list parameters; parsed leniently so a bad value is ignored rather
/// than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    show_in_app: Option<String>,
    limit: Option<String>,
}

impl From<ListParams> for ProductQuery {
    fn from(params: ListParams) -> Self {
        ProductQuery {
            search: params.search.filter(|s| !s.trim().is_empty()),
            show_in_app: params
                .show_in_app
                .filter(|v| v.eq_ignore_ascii_case("true"))
                .map(|_| true),
            limit: params.limit.and_then(|l| l.parse().ok()),
        }
    }
}

/// Decode a JSON object body; an empty body, `null` or `{}` is "no data".
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| ApiError::NoData)?;
    match value.as_object() {
        Some(map) if !map.is_empty() => {}
        _ => return Err(ApiError::NoData),
    }
    serde_json::from_value(value).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

/// GET /products - list products
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Json<ApiResponse<Vec<Product>>> {
    let query = ProductQuery::from(params);
    let products = state.store.list(&query).await;
    tracing::debug!(?query, count = products.len(), "list products");
    Json(ApiResponse::list(products))
}

/// GET /products/{id} - single product, all fields
pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let key = ProductKey::parse(&id)?;
    let product = state.store.get(&key).await.ok_or(ApiError::NotFound)?;
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /products - create product
pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let new: NewProduct = parse_body(&body)?;
    new.check()?;
    let product = state.store.insert(new).await;
    tracing::info!(product_id = product.product_id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            product,
            "Product created successfully",
        )),
    ))
}

/// PUT /products/{id} - update editable fields
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let patch: ProductPatch = parse_body(&body)?;
    let key = ProductKey::parse(&id)?;
    let resp = match state.store.update(&key, patch).await? {
        UpdateOutcome::Modified(product) => {
            tracing::info!(product_id = product.product_id, "product updated");
            ApiResponse::ok_with_message(product, "Product updated successfully")
        }
        UpdateOutcome::Unchanged(product) => {
            ApiResponse::ok_with_message(product, "No changes made")
        }
    };
    Ok(Json(resp))
}

/// DELETE /products/{id} - soft delete (show_in_app = false)
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let key = ProductKey::parse(&id)?;
    let message = if state.store.soft_delete(&key).await? {
        tracing::info!(%id, "product hidden");
        "Product deleted successfully"
    } else {
        "Product was already inactive"
    };
    Ok(Json(ApiResponse::message(message)))
}
