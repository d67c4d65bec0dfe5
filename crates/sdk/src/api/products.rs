//! Product search endpoints.

use crate::client::MarketFiyatiClient;
use crate::lookup::Lookup;
use crate::models::{
    IdentityRequest, SearchByIdentityResponse, SearchRequest, SearchResponse,
    SearchSimilarProductResponse, SimilarityRequest,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::error;

/// Keyword search.
pub const SEARCH_ENDPOINT: &str = "search";
/// Lookup by barcode or internal id.
pub const SEARCH_BY_IDENTITY_ENDPOINT: &str = "searchByIdentity";
/// Similar products. The upstream path really is spelled "Smilar".
pub const SEARCH_SIMILAR_PRODUCT_ENDPOINT: &str = "searchSmilarProduct";

/// Products API. Each call issues exactly one request and never fails:
/// anything that goes wrong is logged and reported as [`Lookup::Absent`].
pub struct ProductsApi<'a> {
    client: &'a MarketFiyatiClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a MarketFiyatiClient) -> Self {
        Self { client }
    }

    /// Search products by keywords.
    pub async fn search(&self, request: &SearchRequest) -> Lookup<SearchResponse> {
        self.fetch(SEARCH_ENDPOINT, request).await
    }

    /// Search products by identity.
    pub async fn search_by_identity(
        &self,
        request: &IdentityRequest,
    ) -> Lookup<SearchByIdentityResponse> {
        self.fetch(SEARCH_BY_IDENTITY_ENDPOINT, request).await
    }

    /// Search products similar to a reference product.
    pub async fn search_similar_product(
        &self,
        request: &SimilarityRequest,
    ) -> Lookup<SearchSimilarProductResponse> {
        self.fetch(SEARCH_SIMILAR_PRODUCT_ENDPOINT, request).await
    }

    async fn fetch<T, B>(&self, endpoint: &str, body: &B) -> Lookup<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        match self.client.http.post(endpoint, body).await {
            Ok(response) => Lookup::Found(response),
            Err(e) => {
                error!(endpoint, kind = e.kind(), error = %e, "Market Fiyatı request failed");
                Lookup::Absent
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn envelope_json() -> serde_json::Value {
        json!({
            "numberOfFound": 3,
            "searchResultType": 1,
            "content": [{
                "id": "1",
                "title": "Tam Buğday Ekmek",
                "brand": "BrandX",
                "imageUrl": "u",
                "categories": [],
                "productDepotInfoList": []
            }],
            "pageInfo": {"page": 0}
        })
    }

    fn client_for(server: &MockServer) -> MarketFiyatiClient {
        MarketFiyatiClient::builder()
            .base_url(server.uri())
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_found() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(json!({"keywords": "ekmek"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.products().search(&SearchRequest::new("ekmek")).await;

        let envelope = result.found().expect("expected a result");
        assert_eq!(envelope.number_of_found, 3);
        assert_eq!(envelope.content[0].brand, "BrandX");
        assert_eq!(envelope.extra["pageInfo"], json!({"page": 0}));
    }

    #[tokio::test]
    async fn test_search_by_identity_sends_identity_type() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/searchByIdentity"))
            .and(body_json(json!({"identity": "8690000000001", "identityType": "id"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .products()
            .search_by_identity(&IdentityRequest::new("8690000000001"))
            .await;

        assert!(result.is_found());
    }

    #[tokio::test]
    async fn test_similar_uses_upstream_spelling() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/searchSmilarProduct"))
            .and(body_json(json!({"id": "1", "keywords": "ekmek"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .products()
            .search_similar_product(&SimilarityRequest::new("1", "ekmek"))
            .await;

        assert!(result.is_found());
        assert_eq!(SEARCH_SIMILAR_PRODUCT_ENDPOINT, "searchSmilarProduct");
    }

    #[tokio::test]
    async fn test_non_2xx_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.products().search(&SearchRequest::new("ekmek")).await;

        assert!(result.is_absent());
    }

    #[tokio::test]
    async fn test_malformed_json_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"numberOfFound\": "))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .products()
            .search_by_identity(&IdentityRequest::new("1"))
            .await;

        assert!(result.is_absent());
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"numberOfFound": 1, "content": "nope"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.products().search(&SearchRequest::new("ekmek")).await;

        assert!(result.is_absent());
    }

    #[tokio::test]
    async fn test_timeout_is_absent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_json(envelope_json()),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client
            .products()
            .search_similar_product(&SimilarityRequest::new("1", "ekmek"))
            .await;

        assert!(result.is_absent());
    }
}
