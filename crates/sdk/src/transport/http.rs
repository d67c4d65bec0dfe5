//! HTTP transport for the Market Fiyatı SDK.

use crate::config::ClientConfig;
use crate::error::{MarketFiyatiError, MarketFiyatiResult};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
///
/// One attempt per call; the upstream is not retried.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> MarketFiyatiResult<Self> {
        let mut headers = header::HeaderMap::new();

        headers.insert(
            header::CACHE_CONTROL,
            header::HeaderValue::from_static("no-cache"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|_| MarketFiyatiError::Config("Invalid user agent".to_string()))?,
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| MarketFiyatiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a URL for the given endpoint name.
    fn build_url(&self, endpoint: &str) -> MarketFiyatiResult<url::Url> {
        Ok(self
            .config
            .base_url
            .join(endpoint.trim_start_matches('/'))?)
    }

    /// POST `body` as JSON to `endpoint` and decode a JSON response.
    ///
    /// Non-2xx answers become [`MarketFiyatiError::Status`]; a body that is
    /// not JSON or does not fit `T` becomes [`MarketFiyatiError::Validation`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> MarketFiyatiResult<T> {
        let url = self.build_url(endpoint)?;
        let payload = serde_json::to_vec(body)?;
        debug!(url = %url, bytes = payload.len(), "POST request");

        let response = self.client.post(url).body(payload).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketFiyatiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
