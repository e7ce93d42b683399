//! REST client for the Rove backend
//!
//! Every request carries the stored auth token as a bearer credential. A
//! 401 response evicts that token from the store before the error is
//! returned, so the next launch starts signed out.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod circles;
pub mod client;
pub mod posts;
pub mod request;
pub mod rooms;
pub mod search;
pub mod users;
pub mod verification;

pub use auth::{Credentials, RegisterRequest};
pub use circles::NewCircle;
pub use client::{ApiClient, ApiClientConfig, Platform};
pub use posts::{NewPost, PostContent};
pub use request::{ApiRequest, HttpMethod};
pub use rooms::NewRoom;
pub use search::SearchFilters;
pub use verification::VerificationKind;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error types for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server rejected the credentials; the stored token has been removed
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// API error with status code and message
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from server
        message: String,
    },

    /// Token store error
    #[error("Storage error: {0}")]
    Storage(#[from] storage::KvError),
}

impl ApiError {
    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = ApiError::Api { status: 404, message: "Post not found".to_string() };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.status(), Some(404));

        let err = ApiError::Unauthorized("expired".to_string());
        assert_eq!(err.status(), Some(401));
    }
}
