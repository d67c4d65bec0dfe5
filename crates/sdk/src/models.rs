//! Request and response shapes for the product search endpoints.
//!
//! Wire names are declared field by field with `#[serde(rename = ...)]`, so
//! the same table drives both serialization and deserialization. Optional
//! request fields that are unset never reach the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default for [`IdentityRequest::identity_type`].
pub const DEFAULT_IDENTITY_TYPE: &str = "id";

// ============================================================================
// REQUESTS
// ============================================================================

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "keywords")]
    pub keywords: String,
    #[serde(rename = "latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Search radius in meters.
    #[serde(rename = "distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
}

impl SearchRequest {
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            latitude: None,
            longitude: None,
            distance: None,
        }
    }
}

/// Body of `POST /searchByIdentity`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityRequest {
    #[serde(rename = "identity")]
    pub identity: String,
    /// What kind of identity this is, e.g. `"id"` or a barcode type.
    #[serde(rename = "identityType")]
    pub identity_type: String,
    #[serde(rename = "keywords", skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(rename = "latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
}

impl IdentityRequest {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            identity_type: DEFAULT_IDENTITY_TYPE.to_string(),
            keywords: None,
            latitude: None,
            longitude: None,
            distance: None,
        }
    }
}

/// Body of `POST /searchSmilarProduct`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityRequest {
    /// Reference product id.
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "keywords")]
    pub keywords: String,
    #[serde(rename = "latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "distance", skip_serializing_if = "Option::is_none")]
    pub distance: Option<i64>,
}

impl SimilarityRequest {
    pub fn new(id: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keywords: keywords.into(),
            latitude: None,
            longitude: None,
            distance: None,
        }
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

/// One store's listing of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDepotInfo {
    #[serde(rename = "depotId")]
    pub depot_id: String,
    #[serde(rename = "depotName")]
    pub depot_name: String,
    /// Market (chain) name.
    #[serde(rename = "marketAdi")]
    pub market_name: String,
    #[serde(rename = "price", deserialize_with = "lenient::float")]
    pub price: f64,
    #[serde(rename = "unitPrice")]
    pub unit_price: String,
    #[serde(rename = "percentage", deserialize_with = "lenient::float")]
    pub percentage: f64,
    #[serde(rename = "longitude", deserialize_with = "lenient::float")]
    pub longitude: f64,
    #[serde(rename = "latitude", deserialize_with = "lenient::float")]
    pub latitude: f64,
    #[serde(rename = "indexTime")]
    pub index_time: String,
}

/// A product with every depot that lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "id")]
    pub id: String,
    #[serde(rename = "title")]
    pub title: String,
    #[serde(rename = "brand")]
    pub brand: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(
        rename = "refinedQuantityUnit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub refined_quantity_unit: Option<String>,
    #[serde(
        rename = "refinedVolumeOrWeight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub refined_volume_or_weight: Option<String>,
    #[serde(rename = "categories")]
    pub categories: Vec<String>,
    #[serde(rename = "productDepotInfoList")]
    pub product_depot_info_list: Vec<ProductDepotInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "count", deserialize_with = "lenient::integer")]
    pub count: i64,
}

/// Facet groups for narrowing a result set. The upstream uses snake_case
/// keys here, unlike the rest of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetMap {
    #[serde(rename = "sub_category")]
    pub sub_category: Vec<Facet>,
    #[serde(rename = "main_category")]
    pub main_category: Vec<Facet>,
    #[serde(rename = "brand")]
    pub brand: Vec<Facet>,
    #[serde(rename = "market_names")]
    pub market_names: Vec<Facet>,
    #[serde(rename = "refined_quantity_unit")]
    pub refined_quantity_unit: Vec<Facet>,
    #[serde(rename = "refined_volume_weight")]
    pub refined_volume_weight: Vec<Facet>,
}

/// Response body shared by all three search endpoints.
///
/// Fields the upstream adds later are kept in `extra` rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultEnvelope {
    #[serde(rename = "numberOfFound", deserialize_with = "lenient::integer")]
    pub number_of_found: i64,
    #[serde(rename = "searchResultType", deserialize_with = "lenient::integer")]
    pub search_result_type: i64,
    #[serde(rename = "content")]
    pub content: Vec<ContentItem>,
    #[serde(rename = "facetMap", default, skip_serializing_if = "Option::is_none")]
    pub facet_map: Option<FacetMap>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchResultEnvelope {
    /// The first (best ranked) product, if any.
    pub fn top(&self) -> Option<&ContentItem> {
        self.content.first()
    }
}

pub type SearchResponse = SearchResultEnvelope;
pub type SearchByIdentityResponse = SearchResultEnvelope;
pub type SearchSimilarProductResponse = SearchResultEnvelope;

// ============================================================================
// SERDE HELPERS
// ============================================================================

/// Numeric fields accept JSON numbers and numeric strings. Text fields are
/// never coerced from numbers.
pub mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(serde_json::Number),
        Text(String),
    }

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom(format!("number {} out of range", n))),
            NumberOrText::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("expected a number, found \"{}\"", s))),
        }
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match NumberOrText::deserialize(deserializer)? {
            NumberOrText::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
                    _ => Err(D::Error::custom(format!("expected an integer, found {}", n))),
                }
            }
            NumberOrText::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| D::Error::custom(format!("expected an integer, found \"{}\"", s))),
        }
    }

    /// [`integer`] for optional fields; `null` stays `None`. Pair with
    /// `#[serde(default)]` so a missing field is `None` too.
    pub fn optional_integer<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapped(#[serde(deserialize_with = "integer")] i64);

        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(n)| n))
    }
}
