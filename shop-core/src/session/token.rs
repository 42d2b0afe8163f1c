//! Bearer Token Claims
//!
//! The API issues JWTs. The client only reads the payload segment to learn
//! who is signed in and until when; signatures are the server's business.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry, seconds since the epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp.map_or(false, |exp| exp <= now.timestamp())
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Read the claims out of a `header.payload.signature` token
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| TokenError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_claims() {
        let token = encode_test_token(&json!({
            "sub": "user-7",
            "email": "wick@example.com",
            "role": "admin",
            "exp": 1_900_000_000
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "user-7");
        assert!(claims.is_admin());
        assert_eq!(claims.expires_at().map(|t| t.timestamp()), Some(1_900_000_000));
    }

    #[test]
    fn test_expiry() {
        let claims = Claims {
            sub: "u".into(),
            email: None,
            role: None,
            exp: Some(1_000),
        };
        let before = DateTime::from_timestamp(999, 0).unwrap();
        let after = DateTime::from_timestamp(1_000, 0).unwrap();
        assert!(!claims.is_expired(before));
        assert!(claims.is_expired(after));

        let no_expiry = Claims { exp: None, ..claims };
        assert!(!no_expiry.is_expired(after));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert_eq!(decode_claims("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.!!!.c"), Err(TokenError::Encoding));

        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Claims(_))));
    }
}
