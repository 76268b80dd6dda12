//! API error types for the Wikia REST API client.

use thiserror::Error;

/// API-specific error type for the Wikia REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest, passed through unchanged
    #[cfg(feature = "api")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or malformed argument, raised before any request is sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The response body was not JSON; the platform answers unknown
    /// communities with an HTML error page
    #[error("Community not found: {0}")]
    CommunityNotFound(String),
}

impl ApiError {
    /// True for argument validation failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ApiError::InvalidArgument(_))
    }

    /// True when the target community does not exist.
    pub fn is_community_not_found(&self) -> bool {
        matches!(self, ApiError::CommunityNotFound(_))
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
