//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// Legacy catalog records may omit the free-text and gallery fields, so
/// everything except the required attributes carries a serde default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identity; `None` for a not-yet-created draft
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    pub origin_price: Decimal,
    pub price: Decimal,
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    /// 0=disabled, 1=enabled
    #[serde(default)]
    pub is_enabled: i32,
    /// Primary image
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    /// Secondary images, bounded length 0..=5
    #[serde(rename = "imagesUrl", default)]
    pub images_url: Vec<String>,
}

/// Create/update product payload
///
/// Prices are already coerced to numbers and `images_url` is filtered of
/// empty entries before this struct is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub title: String,
    pub category: String,
    pub origin_price: Decimal,
    pub price: Decimal,
    pub unit: String,
    pub description: String,
    pub content: String,
    /// 0=disabled, 1=enabled
    pub is_enabled: i32,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "imagesUrl")]
    pub images_url: Vec<String>,
}

/// Wire envelope for create/update requests: `{ "data": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    pub data: ProductPayload,
}

impl ProductPayload {
    /// Wrap the payload in the request envelope.
    pub fn into_envelope(self) -> ProductData {
        ProductData { data: self }
    }
}
