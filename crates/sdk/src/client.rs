//! Main client for the Market Fiyatı SDK.

use crate::api::ProductsApi;
use crate::config::{normalize_base_url, ClientConfig};
use crate::error::MarketFiyatiResult;
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Market Fiyatı product search API.
#[derive(Debug, Clone)]
pub struct MarketFiyatiClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl MarketFiyatiClient {
    /// Create a client against the production API.
    pub fn new() -> MarketFiyatiResult<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Create a new client builder.
    pub fn builder() -> MarketFiyatiClientBuilder {
        MarketFiyatiClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> MarketFiyatiResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Get the product search API.
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Builder for creating a [`MarketFiyatiClient`].
#[derive(Debug, Default)]
pub struct MarketFiyatiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MarketFiyatiClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the API root (e.g. a mock server in tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the `user-agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> MarketFiyatiResult<MarketFiyatiClient> {
        let mut config = ClientConfig::default();

        if let Some(base_url) = self.base_url {
            config.base_url = normalize_base_url(Url::parse(&base_url)?);
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        MarketFiyatiClient::from_config(config)
    }
}
