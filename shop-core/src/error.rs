//! Error types shared by the API layer, the session and configuration.

use thiserror::Error;

/// Server error code for a record that already exists
pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a call against the storefront API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("{message}")]
    Server {
        message: String,
        code: Option<String>,
    },
    #[error("not signed in")]
    Unauthenticated,
}

impl ApiError {
    pub fn server(message: impl Into<String>) -> Self {
        ApiError::Server {
            message: message.into(),
            code: None,
        }
    }

    /// Message to show the shopper: the server's own wording when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the server refused an add because the entry is already there.
    pub fn is_duplicate(&self) -> bool {
        match self {
            ApiError::Server { message, code } => {
                code.as_deref() == Some(ALREADY_EXISTS)
                    || message.to_lowercase().contains("already in wishlist")
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Bearer token could not be used for a session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("token is not a JWT")]
    Malformed,
    #[error("token payload is not valid base64url")]
    Encoding,
    #[error("token claims are invalid: {0}")]
    Claims(String),
    #[error("token expired")]
    Expired,
    #[error("signed out before sign-in finished")]
    Interrupted,
}

/// Configuration file could not be read or written
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config format: {0}")]
    Format(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::server("Only 2 left in stock");
        assert_eq!(err.user_message("Failed to add item"), "Only 2 left in stock");
        assert_eq!(ApiError::Status(502).user_message("Failed to add item"), "Failed to add item");
        assert_eq!(ApiError::server("  ").user_message("fallback"), "fallback");
    }

    #[test]
    fn test_duplicate_detection() {
        assert!(ApiError::server("Product already in wishlist").is_duplicate());
        assert!(ApiError::Server {
            message: "conflict".into(),
            code: Some(ALREADY_EXISTS.into()),
        }
        .is_duplicate());
        assert!(!ApiError::server("Product not found").is_duplicate());
        assert!(!ApiError::Status(409).is_duplicate());
    }
}
