//! Base HTTP client for cryptocurrency data providers.
//!
//! Wraps a single reused `reqwest::Client` with a base URL, a request
//! timeout and optional default headers, and classifies failures into
//! the coarse `ApiError` kinds. Provider-specific endpoints live in
//! their own modules and only pass path + query strings down here.

use crate::error::ApiError;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client bound to one provider's base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    /// Create a client with the default timeout and no extra headers.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        Self::builder(base_url, timeout, HeaderMap::new())
    }

    /// Create a client with a custom timeout and default headers sent
    /// on every request (e.g. provider API-key headers).
    pub fn builder(
        base_url: impl Into<String>,
        timeout: Duration,
        default_headers: HeaderMap,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Network)?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Base URL this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET request for `path_and_query` (already URL-encoded,
    /// starting with `/`) and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    log::error!("Request to {} timed out", url);
                    ApiError::Timeout { url: url.clone() }
                } else {
                    log::error!("Request to {} failed: {}", url, e);
                    ApiError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("API error from {}: {} - {}", url, status, body);
            return Err(ApiError::Status { status, body });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                log::error!("Failed to parse JSON response from {}: {}", url, e);
                ApiError::Decode(e)
            } else if e.is_timeout() {
                ApiError::Timeout { url }
            } else {
                ApiError::Network(e)
            }
        })
    }
}
