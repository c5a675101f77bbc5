//! Client error types

use thiserror::Error;

/// Message shown for every transport or decode failure
pub const CONNECT_FAILED: &str = "Failed to connect to the server";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Non-success status without a readable envelope
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server answered with `success: false`
    #[error("API error: {}", .0.as_deref().unwrap_or("unknown error"))]
    Api(Option<String>),
}

impl ClientError {
    /// True for network, status and decode failures, false for
    /// application-level `success: false` answers.
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Api(_))
    }

    /// Text to put in front of the user.
    ///
    /// Transport failures collapse to [`CONNECT_FAILED`]. Application
    /// failures show the server's `error` verbatim, or `fallback` when the
    /// server sent none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api(Some(msg)) if !msg.is_empty() => msg.clone(),
            ClientError::Api(_) => fallback.to_string(),
            _ => CONNECT_FAILED.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_server_message() {
        let err = ClientError::Api(Some("Product not found".into()));
        assert!(!err.is_transport());
        assert_eq!(err.user_message("Failed to fetch product"), "Product not found");
    }

    #[test]
    fn test_api_error_without_message_falls_back() {
        let err = ClientError::Api(None);
        assert_eq!(err.user_message("Failed to fetch products"), "Failed to fetch products");

        let err = ClientError::Api(Some(String::new()));
        assert_eq!(err.user_message("Failed to fetch products"), "Failed to fetch products");
    }

    #[test]
    fn test_transport_errors_collapse() {
        let err = ClientError::InvalidResponse("<html>".into());
        assert!(err.is_transport());
        assert_eq!(err.user_message("ignored"), CONNECT_FAILED);

        let err = ClientError::Status {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(err.user_message("ignored"), CONNECT_FAILED);
    }
}
