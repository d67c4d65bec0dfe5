//! Configuration types for the Market Fiyatı SDK.

use std::time::Duration;
use url::Url;

/// Production API root. The trailing slash matters: endpoint names are
/// joined onto it as relative paths.
pub const DEFAULT_BASE_URL: &str = "https://api.marketfiyati.org.tr/api/v2/";

/// Upper bound for a single request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The upstream service treats generic client identifiers differently, so
/// every request presents itself as a desktop browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36 Edg/138.0.0.0";

/// Configuration for the Market Fiyatı client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoints are resolved against.
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// Value of the `user-agent` header.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration pointing at the given base URL, with default
    /// timeout and user agent.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL");
        Self::new(base_url)
    }
}

/// `Url::join` drops the last path segment unless the base ends in `/`.
pub(crate) fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
