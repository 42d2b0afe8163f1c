//! Response Envelope
//!
//! Every endpoint answers `{success, data?, error?: {message, code?}}`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Error payload carried by a failed envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Uniform response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Split the envelope into data or a server error.
    pub fn into_result(self) -> ApiResult<Option<T>> {
        if self.success {
            return Ok(self.data);
        }
        Err(match self.error {
            Some(ErrorBody { message, code }) => ApiError::Server { message, code },
            None => ApiError::server(""),
        })
    }
}

/// Decode a raw response body.
///
/// Failed requests usually still carry an envelope; when they don't, the HTTP
/// status is all there is to report.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<Option<T>> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(err) if (200..300).contains(&status) => Err(ApiError::Decode(err.to_string())),
        Err(_) if status == 401 => Err(ApiError::Unauthenticated),
        Err(_) => Err(ApiError::Status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartItem, Product};

    #[test]
    fn test_success_with_data() {
        let body = r#"{"success":true,"data":[{"id":"l1","productId":"p1","name":"Sage","price":12.0,"quantity":2}]}"#;
        let lines: Option<Vec<CartItem>> = decode_envelope(200, body).unwrap();
        let lines = lines.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_id.as_deref(), Some("l1"));
    }

    #[test]
    fn test_record_payload_without_error_field() {
        let body = r#"{"success":true,"data":{"id":"p9","name":"Cedar","price":18.5}}"#;
        let product: Option<Product> = decode_envelope(200, body).unwrap();
        assert_eq!(product.map(|p| p.id), Some("p9".to_string()));
    }

    #[test]
    fn test_success_without_data() {
        let data: Option<serde_json::Value> = decode_envelope(200, r#"{"success":true}"#).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_failure_keeps_server_message_and_code() {
        let body = r#"{"success":false,"error":{"message":"Product already in wishlist","code":"ALREADY_EXISTS"}}"#;
        let err = decode_envelope::<serde_json::Value>(409, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                message: "Product already in wishlist".into(),
                code: Some("ALREADY_EXISTS".into()),
            }
        );
    }

    #[test]
    fn test_non_envelope_bodies() {
        assert_eq!(
            decode_envelope::<serde_json::Value>(502, "<html>Bad Gateway</html>").unwrap_err(),
            ApiError::Status(502)
        );
        assert_eq!(
            decode_envelope::<serde_json::Value>(401, "").unwrap_err(),
            ApiError::Unauthenticated
        );
        assert!(matches!(
            decode_envelope::<serde_json::Value>(200, "not json").unwrap_err(),
            ApiError::Decode(_)
        ));
    }
}
