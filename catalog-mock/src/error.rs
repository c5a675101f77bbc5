//! API error → envelope mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shared::ApiResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No data provided")]
    NoData,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid product ID format")]
    InvalidId,

    #[error("Product not found")]
    NotFound,

    #[error("No valid fields to update")]
    NoFields,

    #[error("Endpoint not found")]
    EndpointNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound | ApiError::EndpointNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body: ApiResponse<()> = ApiResponse::error(self.to_string());
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
