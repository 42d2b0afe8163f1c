//! HTTP Client Wrapper
//!
//! Thin reqwest wrapper that attaches the bearer token and unwraps envelopes.

use std::cell::RefCell;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::envelope::decode_envelope;
use crate::config::ShopConfig;
use crate::error::{ApiError, ApiResult};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a value for use as a single URL path segment
pub fn path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Authenticated client for the storefront API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    pub fn new(config: &ShopConfig) -> ApiResult<Self> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(config.request_timeout());
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: RefCell::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.borrow_mut() = Some(token.into());
    }

    pub fn clear_token(&self) {
        self.token.borrow_mut().take();
    }

    pub fn has_token(&self) -> bool {
        self.token.borrow().is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.borrow().as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<Option<T>> {
        let response = self.authorize(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }

    /// GET that must return data
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        log::debug!("GET {}", path);
        self.send(self.http.get(self.url(path)))
            .await?
            .ok_or_else(|| ApiError::Decode(format!("{} returned no data", path)))
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        log::debug!("POST {}", path);
        self.send::<serde_json::Value>(self.http.post(self.url(path)).json(body))
            .await
            .map(|_| ())
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        log::debug!("PUT {}", path);
        self.send::<serde_json::Value>(self.http.put(self.url(path)).json(body))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        log::debug!("DELETE {}", path);
        self.send::<serde_json::Value>(self.http.delete(self.url(path)))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_escapes_separators() {
        assert_eq!(path_segment("line-42"), "line-42");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_token_lifecycle() {
        let config = ShopConfig {
            api_base_url: "https://shop.example/api/".into(),
            ..ShopConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://shop.example/api");
        assert!(!client.has_token());
        client.set_token("abc");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
    }
}
