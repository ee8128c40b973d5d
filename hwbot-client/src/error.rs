//! Error types for the homework bot clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the homework API or the messenger
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be built, usually a malformed endpoint URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// DNS, connection or timeout failure
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body returned with the error
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if the request never got an HTTP answer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ClientError::api_error(401, "unauthorized").is_client_error());
        assert!(!ClientError::api_error(401, "unauthorized").is_server_error());
        assert!(ClientError::api_error(503, "").is_server_error());
        assert!(!ClientError::ParseError("eof".into()).is_transport());
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::api_error(404, "not found");
        assert_eq!(err.to_string(), "API error (status 404): not found");
    }
}
