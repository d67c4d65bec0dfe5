// Product search tools backed by the Market Fiyatı API

use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
use crate::tools::summary::{identity_summary, search_summary, similar_summary};
use crate::tools::{
    json_schema_integer, json_schema_number, json_schema_object, json_schema_string,
    json_schema_string_with_default, Tool,
};
use anyhow::{ensure, Context, Result};
use market_fiyati_sdk::models::{lenient, DEFAULT_IDENTITY_TYPE};
use market_fiyati_sdk::{
    IdentityRequest, Lookup, MarketFiyatiClient, SearchRequest, SearchResultEnvelope,
    SimilarityRequest,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// What a product tool hands back: a display line and the full result.
#[derive(Debug, Clone)]
pub struct ProductSearchOutput {
    pub summary: String,
    pub result: Lookup<SearchResultEnvelope>,
}

impl ProductSearchOutput {
    fn into_call_result(self) -> Result<CallToolResult> {
        let structured_content = match self.result {
            Lookup::Found(envelope) => Some(serde_json::to_value(envelope)?),
            Lookup::Absent => None,
        };
        Ok(CallToolResult {
            content: vec![ToolContent::text(self.summary)],
            structured_content,
            is_error: None,
        })
    }
}

fn geo_properties(properties: &mut serde_json::Value) {
    properties["latitude"] = json_schema_number("Latitude of the search center");
    properties["longitude"] = json_schema_number("Longitude of the search center");
    properties["distance"] = json_schema_integer("Search radius around the center, in meters");
}

fn log_invocation<T: Serialize>(tool: &str, request: &T) {
    let params = serde_json::to_string(request).unwrap_or_default();
    info!(tool, params = %params, "Tool invoked");
}

// ============================================================================
// search_product
// ============================================================================

/// Tool to search products by keywords
pub struct SearchProductTool {
    client: MarketFiyatiClient,
}

impl SearchProductTool {
    pub fn new(client: MarketFiyatiClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, args: SearchProductArgs) -> ProductSearchOutput {
        let request = SearchRequest {
            keywords: args.keywords,
            latitude: args.latitude,
            longitude: args.longitude,
            distance: args.distance,
        };
        log_invocation("search_product", &request);

        let result = self.client.products().search(&request).await;
        ProductSearchOutput {
            summary: search_summary(&result),
            result,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchProductArgs {
    pub keywords: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_integer")]
    pub distance: Option<i64>,
}

#[async_trait::async_trait]
impl Tool for SearchProductTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = serde_json::json!({
            "keywords": json_schema_string("Keywords to search for, e.g. \"ekmek\"")
        });
        geo_properties(&mut properties);

        ToolSchema {
            name: "search_product".to_string(),
            title: Some("Search product".to_string()),
            description: "Search for products matching given keywords.".to_string(),
            input_schema: json_schema_object(properties, vec!["keywords"]),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchProductArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for search_product")?;
        ensure!(
            !args.keywords.trim().is_empty(),
            "Invalid arguments for search_product: keywords must not be empty"
        );

        self.run(args).await.into_call_result()
    }
}

// ============================================================================
// search_product_by_identity
// ============================================================================

/// Tool to look a product up by barcode or internal id
pub struct SearchProductByIdentityTool {
    client: MarketFiyatiClient,
}

impl SearchProductByIdentityTool {
    pub fn new(client: MarketFiyatiClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, args: SearchProductByIdentityArgs) -> ProductSearchOutput {
        let request = IdentityRequest {
            identity: args.identity,
            identity_type: args
                .identity_type
                .unwrap_or_else(|| DEFAULT_IDENTITY_TYPE.to_string()),
            keywords: args.keywords,
            latitude: args.latitude,
            longitude: args.longitude,
            distance: args.distance,
        };
        log_invocation("search_product_by_identity", &request);

        let result = self.client.products().search_by_identity(&request).await;
        ProductSearchOutput {
            summary: identity_summary(&result, &request.identity),
            result,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchProductByIdentityArgs {
    pub identity: String,
    #[serde(rename = "identityType", default)]
    pub identity_type: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_integer")]
    pub distance: Option<i64>,
}

#[async_trait::async_trait]
impl Tool for SearchProductByIdentityTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = serde_json::json!({
            "identity": json_schema_string("Barcode or internal product id"),
            "identityType": json_schema_string_with_default(
                "Kind of identity being supplied",
                DEFAULT_IDENTITY_TYPE
            ),
            "keywords": json_schema_string("Optional keywords to narrow the result")
        });
        geo_properties(&mut properties);

        ToolSchema {
            name: "search_product_by_identity".to_string(),
            title: Some("Search product by identity".to_string()),
            description:
                "Retrieve product information by a unique identity (e.g., barcode or internal ID)."
                    .to_string(),
            input_schema: json_schema_object(properties, vec!["identity"]),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchProductByIdentityArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for search_product_by_identity")?;

        self.run(args).await.into_call_result()
    }
}

// ============================================================================
// search_similar_products
// ============================================================================

/// Tool to find products similar to a reference product
pub struct SearchSimilarProductsTool {
    client: MarketFiyatiClient,
}

impl SearchSimilarProductsTool {
    pub fn new(client: MarketFiyatiClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, args: SearchSimilarProductsArgs) -> ProductSearchOutput {
        let request = SimilarityRequest {
            id: args.id,
            keywords: args.keywords,
            latitude: args.latitude,
            longitude: args.longitude,
            distance: args.distance,
        };
        log_invocation("search_similar_products", &request);

        let result = self.client.products().search_similar_product(&request).await;
        ProductSearchOutput {
            summary: similar_summary(&result),
            result,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSimilarProductsArgs {
    pub id: String,
    pub keywords: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_integer")]
    pub distance: Option<i64>,
}

#[async_trait::async_trait]
impl Tool for SearchSimilarProductsTool {
    fn schema(&self) -> ToolSchema {
        let mut properties = serde_json::json!({
            "id": json_schema_string("Id of the reference product"),
            "keywords": json_schema_string("Keywords describing the reference product")
        });
        geo_properties(&mut properties);

        ToolSchema {
            name: "search_similar_products".to_string(),
            title: Some("Search similar products".to_string()),
            description: "Find products similar to a reference item ID, optionally refined by keywords and geographic constraints.".to_string(),
            input_schema: json_schema_object(properties, vec!["id", "keywords"]),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchSimilarProductsArgs = serde_json::from_value(arguments)
            .context("Invalid arguments for search_similar_products")?;

        self.run(args).await.into_call_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn upstream_body() -> serde_json::Value {
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
            }]
        })
    }

    fn client_for(server: &MockServer) -> MarketFiyatiClient {
        MarketFiyatiClient::builder()
            .base_url(server.uri())
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap()
    }

    async fn mount(server: &MockServer, endpoint: &str, expected_body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body()))
            .expect(1)
            .mount(server)
            .await;
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0] {
            ToolContent::Text { text } => text.as_str(),
        }
    }

    #[tokio::test]
    async fn test_search_product_example() {
        let server = MockServer::start().await;
        mount(&server, "/search", json!({"keywords": "ekmek"})).await;

        let tool = SearchProductTool::new(client_for(&server));
        let result = tool.execute(json!({"keywords": "ekmek"})).await.unwrap();

        assert_eq!(
            text_of(&result),
            "Top match: Tam Buğday Ekmek (BrandX) — 3 result(s)."
        );
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["numberOfFound"], 3);
        assert_eq!(structured["content"][0]["title"], "Tam Buğday Ekmek");
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_search_product_null_arguments_are_not_forwarded() {
        let server = MockServer::start().await;
        mount(&server, "/search", json!({"keywords": "süt", "distance": 750})).await;

        let tool = SearchProductTool::new(client_for(&server));
        let result = tool
            .execute(json!({"keywords": "süt", "latitude": null, "distance": 750}))
            .await
            .unwrap();

        assert!(result.structured_content.is_some());
    }

    #[tokio::test]
    async fn test_integral_float_distance_is_accepted() {
        let server = MockServer::start().await;
        mount(&server, "/search", json!({"keywords": "süt", "distance": 1500})).await;

        let tool = SearchProductTool::new(client_for(&server));
        let result = tool
            .execute(json!({"keywords": "süt", "distance": 1500.0}))
            .await
            .unwrap();

        assert!(result.is_error.is_none());
        assert!(result.structured_content.is_some());
        assert!(tool
            .execute(json!({"keywords": "süt", "distance": 1500.5}))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_search_product_rejects_empty_keywords() {
        let tool = SearchProductTool::new(MarketFiyatiClient::new().unwrap());

        assert!(tool.execute(json!({"keywords": "  "})).await.is_err());
        assert!(tool.execute(json!({"latitude": 41.0})).await.is_err());
    }

    #[tokio::test]
    async fn test_search_by_identity_summary() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/searchByIdentity",
            json!({
                "identity": "8690000000001",
                "identityType": "barcode",
                "latitude": 41.0,
                "longitude": 29.0
            }),
        )
        .await;

        let tool = SearchProductByIdentityTool::new(client_for(&server));
        let output = tool
            .run(SearchProductByIdentityArgs {
                identity: "8690000000001".into(),
                identity_type: Some("barcode".into()),
                keywords: None,
                latitude: Some(41.0),
                longitude: Some(29.0),
                distance: None,
            })
            .await;

        assert_eq!(
            output.summary,
            "Found 3 item(s) for '8690000000001'. Example: Tam Buğday Ekmek (BrandX)."
        );
        assert!(output.result.is_found());
    }

    #[tokio::test]
    async fn test_search_by_identity_defaults_identity_type() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/searchByIdentity",
            json!({"identity": "42", "identityType": "id"}),
        )
        .await;

        let tool = SearchProductByIdentityTool::new(client_for(&server));
        let result = tool.execute(json!({"identity": "42"})).await.unwrap();

        assert!(text_of(&result).starts_with("Found 3 item(s) for '42'."));
    }

    #[tokio::test]
    async fn test_search_similar_products_summary() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/searchSmilarProduct",
            json!({"id": "1", "keywords": "ekmek"}),
        )
        .await;

        let tool = SearchSimilarProductsTool::new(client_for(&server));
        let result = tool
            .execute(json!({"id": "1", "keywords": "ekmek"}))
            .await
            .unwrap();

        assert_eq!(
            text_of(&result),
            "3 similar product(s) found. Closest match: Tam Buğday Ekmek (BrandX)."
        );
    }

    #[tokio::test]
    async fn test_search_similar_requires_keywords() {
        let tool = SearchSimilarProductsTool::new(MarketFiyatiClient::new().unwrap());
        assert!(tool.execute(json!({"id": "1"})).await.is_err());
    }

    #[tokio::test]
    async fn test_upstream_failures_yield_no_results() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/searchByIdentity"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/searchSmilarProduct"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_json(upstream_body()),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);

        let search = SearchProductTool::new(client.clone())
            .execute(json!({"keywords": "ekmek"}))
            .await
            .unwrap();
        assert_eq!(text_of(&search), "No results found.");
        assert!(search.structured_content.is_none());

        let identity = SearchProductByIdentityTool::new(client.clone())
            .execute(json!({"identity": "1"}))
            .await
            .unwrap();
        assert_eq!(text_of(&identity), "No products found.");
        assert!(identity.structured_content.is_none());

        let similar = SearchSimilarProductsTool::new(client)
            .execute(json!({"id": "1", "keywords": "ekmek"}))
            .await
            .unwrap();
        assert_eq!(text_of(&similar), "No similar products found.");
        assert!(similar.structured_content.is_none());
    }

    #[tokio::test]
    async fn test_empty_content_keeps_structured_result() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "numberOfFound": 0,
                "searchResultType": 1,
                "content": []
            })))
            .mount(&server)
            .await;

        let tool = SearchProductTool::new(client_for(&server));
        let output = tool
            .run(SearchProductArgs {
                keywords: "xyz".into(),
                latitude: None,
                longitude: None,
                distance: None,
            })
            .await;

        assert_eq!(output.summary, "No results found.");
        assert_eq!(output.result.found().unwrap().number_of_found, 0);
    }

    #[test]
    fn test_schemas() {
        let client = MarketFiyatiClient::new().unwrap();

        let search = SearchProductTool::new(client.clone()).schema();
        assert_eq!(search.name, "search_product");
        assert_eq!(search.title.as_deref(), Some("Search product"));
        assert_eq!(search.input_schema["required"], json!(["keywords"]));
        assert_eq!(search.input_schema["properties"]["distance"]["type"], "integer");

        let identity = SearchProductByIdentityTool::new(client.clone()).schema();
        assert_eq!(identity.name, "search_product_by_identity");
        assert_eq!(identity.input_schema["required"], json!(["identity"]));
        assert_eq!(
            identity.input_schema["properties"]["identityType"]["default"],
            "id"
        );

        let similar = SearchSimilarProductsTool::new(client).schema();
        assert_eq!(similar.name, "search_similar_products");
        assert_eq!(similar.input_schema["required"], json!(["id", "keywords"]));
    }
}
