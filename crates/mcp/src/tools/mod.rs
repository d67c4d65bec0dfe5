pub mod products;
pub mod summary;
mod registry;

pub use products::{
    ProductSearchOutput, SearchProductArgs, SearchProductByIdentityArgs,
    SearchProductByIdentityTool, SearchProductTool, SearchSimilarProductsArgs,
    SearchSimilarProductsTool,
};
pub use registry::{
    json_schema_integer, json_schema_number, json_schema_object, json_schema_string,
    json_schema_string_with_default, Tool, ToolRegistry,
};

use market_fiyati_sdk::MarketFiyatiClient;
use std::sync::Arc;

/// Registry holding the three product tools, all sharing one client.
pub fn product_registry(client: MarketFiyatiClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SearchProductTool::new(client.clone())));
    registry.register(Arc::new(SearchProductByIdentityTool::new(client.clone())));
    registry.register(Arc::new(SearchSimilarProductsTool::new(client)));
    registry
}
