//! Error types for the Market Fiyatı SDK.

/// Result type for SDK operations.
pub type MarketFiyatiResult<T> = Result<T, MarketFiyatiError>;

/// Error types that can occur while talking to the Market Fiyatı API.
///
/// These never leave the public product operations: [`crate::api::ProductsApi`]
/// logs them and reports [`crate::Lookup::Absent`]. They are public so the
/// transport can be used directly when the failure cause matters.
#[derive(Debug, thiserror::Error)]
pub enum MarketFiyatiError {
    /// The upstream did not answer within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection, DNS, TLS or body transfer failure.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The upstream answered with a non-2xx status.
    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    /// The body was not JSON, or did not fit the expected response shape.
    #[error("Validation error: {0}")]
    Validation(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl MarketFiyatiError {
    /// Stable label for the failure category, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Http(_) => "transport",
            Self::Status { .. } => "status",
            Self::Validation(_) => "validation",
            Self::Config(_) | Self::InvalidUrl(_) => "config",
        }
    }
}

impl From<reqwest::Error> for MarketFiyatiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}
