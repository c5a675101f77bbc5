//! API Response types
//!
//! Every endpoint of the products API wraps its payload in the same
//! envelope:
//!
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "count": 12,
//!     "message": "Product created successfully"
//! }
//! ```
//!
//! and on failure `{"success": false, "error": "Product not found"}`.

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Row count, list endpoint only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// `#[serde(default)]` on `Option<T>` would require `T: Default`
fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            error: None,
            message: None,
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    /// Create a successful response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            error: None,
            message: Some(message.into()),
        }
    }

    /// Create an error response
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Create a successful list response, `count` set to the row count
    pub fn list(data: Vec<T>) -> Self {
        Self {
            count: Some(data.len()),
            ..Self::ok(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sets_count() {
        let resp = ApiResponse::list(vec![1, 2, 3]);
        assert!(resp.success);
        assert_eq!(resp.count, Some(3));
    }

    #[test]
    fn test_error_envelope_shape() {
        let resp: ApiResponse<()> = ApiResponse::error("Product not found");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "success": false, "error": "Product not found" })
        );
    }

    #[test]
    fn test_decode_without_data() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"message":"Product deleted successfully"}"#)
                .unwrap();
        assert!(resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("Product deleted successfully"));
    }
}
