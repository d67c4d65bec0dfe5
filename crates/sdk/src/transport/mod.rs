//! Transport layer for the Market Fiyatı SDK.

pub mod http;

pub use http::HttpTransport;
