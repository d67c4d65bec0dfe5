//! # Market Fiyatı SDK
//!
//! Rust client for the product search API behind marketfiyati.org.tr, the
//! Turkish grocery price comparison service.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use market_fiyati_sdk::{Lookup, MarketFiyatiClient, MarketFiyatiResult, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> MarketFiyatiResult<()> {
//!     let client = MarketFiyatiClient::new()?;
//!
//!     let request = SearchRequest {
//!         latitude: Some(41.01),
//!         longitude: Some(28.97),
//!         distance: Some(2000),
//!         ..SearchRequest::new("ekmek")
//!     };
//!
//!     match client.products().search(&request).await {
//!         Lookup::Found(result) => println!("{} products", result.number_of_found),
//!         Lookup::Absent => println!("no result"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! The product operations never return errors. Timeouts, transport
//! failures, non-2xx answers and bodies that do not validate are logged and
//! reported as [`Lookup::Absent`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod transport;

pub use api::{
    ProductsApi, SEARCH_BY_IDENTITY_ENDPOINT, SEARCH_ENDPOINT, SEARCH_SIMILAR_PRODUCT_ENDPOINT,
};
pub use client::{MarketFiyatiClient, MarketFiyatiClientBuilder};
pub use config::ClientConfig;
pub use error::{MarketFiyatiError, MarketFiyatiResult};
pub use lookup::Lookup;
pub use models::{
    ContentItem, Facet, FacetMap, IdentityRequest, ProductDepotInfo, SearchByIdentityResponse,
    SearchRequest, SearchResponse, SearchResultEnvelope, SearchSimilarProductResponse,
    SimilarityRequest,
};
